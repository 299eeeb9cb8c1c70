mod config;
mod engine;
mod error;
mod feed;
mod models;
mod portfolio;
mod utils;
mod valuation;

use crate::config::Config;
use crate::engine::PaperTradingEngine;
use crate::models::position::Side;
use crate::utils::logging;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    logging::init()?;
    log::info!("paper trading session starting...");

    let config = Config::load()?;
    log::info!(
        "feed source: {} - symbol: {}",
        config.feed.source,
        config.feed.symbol
    );

    let feed = feed::from_config(&config)?;
    let mut engine = PaperTradingEngine::from_config(&config);

    let tick = feed.latest_price().await?;
    log::info!("current price: {}", tick.price);

    // Demo session: one long, valued a tick later, then closed.
    let position = engine.open_position(Side::Long, config.trading.default_quantity, tick.price)?;
    log::info!(
        "trade value: {}",
        engine::trade_value(position.quantity, position.entry_price)
    );

    let next = feed.latest_price().await?;
    let summary = engine.summary(next.price)?;
    log::info!(
        "equity: {} - p/l: {} ({:.2}%)",
        summary.total_equity,
        summary.total_profit_loss,
        summary.profit_loss_percent
    );

    engine.close_position(&position.id, next.price)?;

    let last = feed.latest_price().await?;
    let summary = engine.summary(last.price)?;
    log::info!(
        "session done - active: {} - history: {} - equity: {}",
        engine.active().len(),
        engine.history().len(),
        summary.total_equity
    );

    Ok(())
}
