//! External collaborator contracts and their production implementations.

pub mod assets;
pub mod chart_api;
pub mod market_data;

pub use assets::{AssetCatalog, StaticAssetCatalog};
pub use chart_api::ChartApiProvider;
pub use market_data::PriceDataProvider;
