//! Price feed interface and implementations.
//!
//! The feed implementation is selected by configuration: the Binance REST
//! connector for live prices, or a deterministic fixture tape for demos and
//! tests. Core logic never falls back to fabricated data on its own.

pub mod binance;
pub mod fixture;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::TradingError;
use crate::models::price::PriceTick;

pub use binance::BinanceFeed;
pub use fixture::FixtureFeed;

/// Source of the latest reference price for the traded asset.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch the most recent price. Implementations must return a positive
    /// price or an error, never a placeholder.
    async fn latest_price(&self) -> Result<PriceTick, TradingError>;
}

/// Build the feed named by the configuration.
pub fn from_config(config: &Config) -> Result<Box<dyn PriceFeed>, TradingError> {
    match config.feed.source.to_lowercase().as_str() {
        "binance" => Ok(Box::new(BinanceFeed::from_config(&config.feed))),
        "fixture" => Ok(Box::new(FixtureFeed::new())),
        other => Err(TradingError::ConfigError(format!(
            "unknown feed source: {}",
            other
        ))),
    }
}
