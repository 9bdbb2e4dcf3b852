//! Job types for the periodic analysis workflow

use serde::{Deserialize, Serialize};

/// Job to analyze one asset and append the resulting signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeAssetJob {
    pub symbol: String,
}
