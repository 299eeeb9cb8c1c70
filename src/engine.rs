//! Paper trading engine.
//!
//! In-memory position store plus the open/close lifecycle. All trading is
//! simulated; nothing leaves the process.

use std::collections::HashMap;

use chrono::Utc;

use crate::config::Config;
use crate::error::TradingError;
use crate::models::portfolio::PortfolioSummary;
use crate::models::position::{Position, PositionId, Side};
use crate::portfolio;
use crate::utils::logging;

/// Quantity used when a trade form is prefilled from a signal.
pub const DEFAULT_ORDER_QUANTITY: f64 = 0.01;

/// Notional value of a prospective trade (quantity x price).
pub fn trade_value(quantity: f64, price: f64) -> f64 {
    quantity * price
}

pub struct PaperTradingEngine {
    starting_capital: f64,
    positions: HashMap<PositionId, Position>,
}

impl PaperTradingEngine {
    pub fn new(starting_capital: f64) -> Self {
        PaperTradingEngine {
            starting_capital,
            positions: HashMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.trading.starting_capital)
    }

    pub fn starting_capital(&self) -> f64 {
        self.starting_capital
    }

    /// Open a new simulated position at the given entry price.
    pub fn open_position(
        &mut self,
        side: Side,
        quantity: f64,
        entry_price: f64,
    ) -> Result<Position, TradingError> {
        if entry_price <= 0.0 {
            return Err(TradingError::InvalidPrice(entry_price));
        }
        if quantity <= 0.0 {
            return Err(TradingError::InvalidQuantity(quantity));
        }

        let position = Position::open(side, quantity, entry_price);
        logging::log_position_opened(&position);
        self.positions.insert(position.id.clone(), position.clone());
        Ok(position)
    }

    /// Close an open position at the given price. Closing an already-closed
    /// position fails; there is no reopening.
    pub fn close_position(
        &mut self,
        id: &PositionId,
        close_price: f64,
    ) -> Result<Position, TradingError> {
        if close_price <= 0.0 {
            return Err(TradingError::InvalidPrice(close_price));
        }

        let position = self
            .positions
            .get_mut(id)
            .ok_or_else(|| TradingError::PositionNotFound(id.clone()))?;

        position.close(close_price, Utc::now())?;
        logging::log_position_closed(position);
        Ok(position.clone())
    }

    pub fn position(&self, id: &PositionId) -> Option<&Position> {
        self.positions.get(id)
    }

    /// Open positions, newest first.
    pub fn active(&self) -> Vec<Position> {
        self.partition(|p| p.is_open())
    }

    /// Closed positions, newest first.
    pub fn history(&self) -> Vec<Position> {
        self.partition(|p| p.is_closed())
    }

    fn partition<F: Fn(&Position) -> bool>(&self, keep: F) -> Vec<Position> {
        let mut selected: Vec<Position> = self
            .positions
            .values()
            .filter(|p| keep(p))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.opened_at.cmp(&a.opened_at));
        selected
    }

    /// Portfolio valuation over all positions, open and closed, at the
    /// given live price.
    pub fn summary(&self, current_price: f64) -> Result<PortfolioSummary, TradingError> {
        let positions: Vec<Position> = self.positions.values().cloned().collect();
        portfolio::aggregate(self.starting_capital, &positions, current_price)
    }
}
