//! Logging utilities.
//!
//! Log initialization plus helpers for position lifecycle events.

use env_logger::Builder;
use log::LevelFilter;
use std::env;

use crate::error::TradingError;
use crate::models::position::Position;

/// Initialize the logging system
pub fn init() -> Result<(), TradingError> {
    let mut builder = Builder::from_default_env();

    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let level_filter = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    builder
        .filter_level(level_filter)
        .format_timestamp_millis()
        .init();

    log::info!("logging initialized: level = {}", log_level);

    Ok(())
}

pub fn log_position_opened(position: &Position) {
    log::info!(
        "position opened: {} - side: {} - quantity: {} - entry: {}",
        position.id,
        position.side,
        position.quantity,
        position.entry_price
    );
}

pub fn log_position_closed(position: &Position) {
    log::info!(
        "position closed: {} - close price: {}",
        position.id,
        position.close_price.unwrap_or_default()
    );
}

pub fn log_error(context: &str, error: &TradingError) {
    log::error!("error - {}: {}", context, error);
}
