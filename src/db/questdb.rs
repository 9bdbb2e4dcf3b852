//! QuestDB-backed signal store over the Postgres wire protocol.

use crate::config;
use crate::db::{SignalStore, StoreError};
use crate::models::{Direction, Signal, SignalRecord, Vote};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::{Client, NoTls};

pub struct QuestDatabase {
    client: Arc<RwLock<Option<Client>>>,
}

impl QuestDatabase {
    pub async fn new() -> Result<Self, StoreError> {
        let questdb_url = config::get_questdb_url();
        let (client, connection) = tokio_postgres::connect(&questdb_url, NoTls).await?;

        // The connection task owns the socket; it ends when the client drops.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "QuestDB connection error");
            }
        });

        let db = Self {
            client: Arc::new(RwLock::new(Some(client))),
        };
        db.init_schema().await?;

        Ok(db)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::NotConnected)?;

        // QuestDB syntax: designated TIMESTAMP column, day partitions.
        c.execute(
            "CREATE TABLE IF NOT EXISTS signals (
                timestamp TIMESTAMP,
                id LONG,
                symbol SYMBOL,
                direction SYMBOL,
                strength LONG,
                ema_signal SYMBOL,
                rsi_signal SYMBOL,
                bbands_signal SYMBOL,
                macd_signal SYMBOL,
                long_term_trend SYMBOL
            ) TIMESTAMP(timestamp) PARTITION BY DAY",
            &[],
        )
        .await?;

        Ok(())
    }

    fn signal_from_row(row: &tokio_postgres::Row) -> Signal {
        let timestamp_naive: chrono::NaiveDateTime = row.get(0);
        let id: i64 = row.get(1);
        let symbol: String = row.get(2);
        let direction: String = row.get(3);
        let strength: i64 = row.get(4);
        let ema_signal: String = row.get(5);
        let rsi_signal: String = row.get(6);
        let bbands_signal: String = row.get(7);
        let macd_signal: String = row.get(8);
        let long_term_trend: String = row.get(9);

        Signal {
            id,
            symbol,
            direction: Direction::from_db(&direction),
            strength: strength.clamp(0, 4) as u8,
            ema_signal: Vote::from_db(&ema_signal),
            rsi_signal: Vote::from_db(&rsi_signal),
            bbands_signal: Vote::from_db(&bbands_signal),
            macd_signal: Vote::from_db(&macd_signal),
            long_term_trend: Vote::from_db(&long_term_trend),
            created_at: DateTime::from_naive_utc_and_offset(timestamp_naive, Utc),
        }
    }
}

#[async_trait::async_trait]
impl SignalStore for QuestDatabase {
    async fn save(&self, record: &SignalRecord) -> Result<i64, StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::NotConnected)?;

        // QuestDB has no auto-increment; derive the id from the creation
        // time like the rest of the stack does.
        let id = record.created_at.timestamp_millis();
        let timestamp_naive = record.created_at.naive_utc();

        c.execute(
            "INSERT INTO signals (timestamp, id, symbol, direction, strength,
                ema_signal, rsi_signal, bbands_signal, macd_signal, long_term_trend)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
            &[
                &timestamp_naive,
                &id,
                &record.symbol,
                &record.direction.as_str(),
                &(record.strength as i64),
                &record.ema_signal.as_str(),
                &record.rsi_signal.as_str(),
                &record.bbands_signal.as_str(),
                &record.macd_signal.as_str(),
                &record.long_term_trend.as_str(),
            ],
        )
        .await?;

        Ok(id)
    }

    async fn query_recent(&self, limit: usize) -> Result<Vec<Signal>, StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::NotConnected)?;

        let query = format!(
            "SELECT timestamp, id, symbol, direction, strength,
                ema_signal, rsi_signal, bbands_signal, macd_signal, long_term_trend
             FROM signals
             ORDER BY timestamp DESC
             LIMIT {}",
            limit
        );
        let rows = c.query(&query, &[]).await?;

        Ok(rows.iter().map(Self::signal_from_row).collect())
    }

    async fn query_by_min_strength(
        &self,
        min_strength: u8,
        limit: usize,
    ) -> Result<Vec<Signal>, StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::NotConnected)?;

        let query = format!(
            "SELECT timestamp, id, symbol, direction, strength,
                ema_signal, rsi_signal, bbands_signal, macd_signal, long_term_trend
             FROM signals
             WHERE strength >= $1
             ORDER BY timestamp DESC
             LIMIT {}",
            limit
        );
        let rows = c.query(&query, &[&(min_strength as i64)]).await?;

        Ok(rows.iter().map(Self::signal_from_row).collect())
    }
}
