//! Tradable asset reference data.
//!
//! Assets are maintained by an external catalog process; the engine only
//! reads them to validate analyze requests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub active: bool,
}

impl Asset {
    pub fn new(id: i64, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            active: true,
        }
    }
}
