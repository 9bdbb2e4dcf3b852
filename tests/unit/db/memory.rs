//! Unit tests for the in-memory signal store

use chrono::{DateTime, Duration, TimeZone, Utc};
use sinaltrix::db::{MemorySignalStore, SignalStore};
use sinaltrix::models::{Direction, SignalRecord, Vote};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn record(symbol: &str, strength: u8, minutes_after_base: i64) -> SignalRecord {
    let direction = if strength >= 3 {
        Direction::Call
    } else {
        Direction::Esperar
    };
    SignalRecord {
        symbol: symbol.to_string(),
        direction,
        strength,
        ema_signal: Vote::Call,
        rsi_signal: Vote::Neutral,
        bbands_signal: Vote::Call,
        macd_signal: Vote::Call,
        long_term_trend: Vote::Call,
        created_at: base_time() + Duration::minutes(minutes_after_base),
    }
}

#[tokio::test]
async fn save_assigns_increasing_ids() {
    let store = MemorySignalStore::new();
    let first = store.save(&record("EURUSD=X", 4, 0)).await.unwrap();
    let second = store.save(&record("EURUSD=X", 0, 1)).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn query_recent_returns_newest_first() {
    let store = MemorySignalStore::new();
    // Insert out of chronological order.
    store.save(&record("EURUSD=X", 0, 5)).await.unwrap();
    store.save(&record("GBPUSD=X", 4, 0)).await.unwrap();
    store.save(&record("BTC-USD", 3, 10)).await.unwrap();

    let recent = store.query_recent(10).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].symbol, "BTC-USD");
    assert_eq!(recent[1].symbol, "EURUSD=X");
    assert_eq!(recent[2].symbol, "GBPUSD=X");
}

#[tokio::test]
async fn query_recent_truncates_to_limit() {
    let store = MemorySignalStore::new();
    for i in 0..5 {
        store.save(&record("EURUSD=X", 0, i)).await.unwrap();
    }
    let recent = store.query_recent(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].created_at, base_time() + Duration::minutes(4));
}

#[tokio::test]
async fn query_by_min_strength_filters_and_orders() {
    let store = MemorySignalStore::new();
    store.save(&record("EURUSD=X", 0, 0)).await.unwrap();
    store.save(&record("GBPUSD=X", 3, 1)).await.unwrap();
    store.save(&record("USDJPY=X", 4, 2)).await.unwrap();
    store.save(&record("AUDUSD=X", 0, 3)).await.unwrap();

    let strong = store.query_by_min_strength(3, 10).await.unwrap();
    assert_eq!(strong.len(), 2);
    assert_eq!(strong[0].symbol, "USDJPY=X");
    assert_eq!(strong[1].symbol, "GBPUSD=X");
    assert!(strong.iter().all(|s| s.strength >= 3));
}

#[tokio::test]
async fn empty_store_queries_return_empty_not_error() {
    let store = MemorySignalStore::new();
    assert!(store.query_recent(10).await.unwrap().is_empty());
    assert!(store.query_by_min_strength(3, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn saved_record_round_trips_field_for_field() {
    let store = MemorySignalStore::new();
    let record = record("EURUSD=X", 3, 0);
    let id = store.save(&record).await.unwrap();

    let fetched = store.query_recent(1).await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0], record.into_signal(id));
}
