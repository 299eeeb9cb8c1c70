use serde::{Deserialize, Serialize};

/// Valuation of the whole portfolio at one price. Derived on demand,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSummary {
    pub starting_capital: f64,
    pub total_equity: f64,
    pub total_profit_loss: f64,
    pub profit_loss_percent: f64,
}
