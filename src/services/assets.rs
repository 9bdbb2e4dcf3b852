//! Read-only view of the asset catalog.
//!
//! Catalog management (creation, activation) belongs to an external
//! process; the engine only resolves symbols against the projection it was
//! handed.

use crate::config;
use crate::models::Asset;

pub trait AssetCatalog: Send + Sync {
    /// All assets currently eligible for analysis.
    fn get_active(&self) -> Vec<Asset>;

    /// Resolve a symbol to an active asset. Inactive and unknown symbols
    /// both come back as `None`.
    fn find_active(&self, symbol: &str) -> Option<Asset>;
}

/// Catalog backed by a fixed list, loaded from the environment at startup.
pub struct StaticAssetCatalog {
    assets: Vec<Asset>,
}

impl StaticAssetCatalog {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn from_env() -> Self {
        Self::new(config::get_assets())
    }
}

impl AssetCatalog for StaticAssetCatalog {
    fn get_active(&self) -> Vec<Asset> {
        self.assets.iter().filter(|a| a.active).cloned().collect()
    }

    fn find_active(&self, symbol: &str) -> Option<Asset> {
        self.assets
            .iter()
            .find(|a| a.active && a.symbol.eq_ignore_ascii_case(symbol))
            .cloned()
    }
}
