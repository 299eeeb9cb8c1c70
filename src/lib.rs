//! Paper trading core.
//!
//! Position lifecycle, valuation and portfolio aggregation for a simulated
//! trading account, plus a configurable price feed.

pub mod config;
pub mod engine;
pub mod error;
pub mod feed;
pub mod models;
pub mod portfolio;
pub mod utils;
pub mod valuation;

pub use crate::engine::PaperTradingEngine;
pub use crate::error::TradingError;
pub use crate::feed::PriceFeed;
pub use crate::models::portfolio::PortfolioSummary;
pub use crate::models::position::{Position, PositionId, PositionStatus, Side};
pub use crate::models::price::PriceTick;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, TradingError>;
