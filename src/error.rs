use thiserror::Error;

use crate::models::position::PositionId;

#[derive(Error, Debug)]
pub enum TradingError {
    #[error("Position not found: {0}")]
    PositionNotFound(PositionId),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(f64),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Division undefined: {0}")]
    DivisionUndefined(String),

    #[error("Feed error: {0}")]
    FeedError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}
