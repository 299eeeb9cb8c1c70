//! Portfolio aggregation.
//!
//! Sums profit/loss across open and closed positions against a fixed
//! starting capital. Pure function of its inputs.

use crate::error::TradingError;
use crate::models::portfolio::PortfolioSummary;
use crate::models::position::Position;
use crate::valuation;

/// Value the whole position set at one price.
///
/// Open positions are marked at `current_price`, closed ones at their frozen
/// close price. The return percentage is taken against the capital base
/// before this period's profit; a zero base is rejected instead of producing
/// NaN or infinity.
pub fn aggregate(
    starting_capital: f64,
    positions: &[Position],
    current_price: f64,
) -> Result<PortfolioSummary, TradingError> {
    let mut total_profit_loss = 0.0;
    for position in positions {
        total_profit_loss += valuation::profit_loss(position, current_price)?;
    }

    let total_equity = starting_capital + total_profit_loss;
    let capital_base = total_equity - total_profit_loss;

    if capital_base == 0.0 {
        return Err(TradingError::DivisionUndefined(
            "return percentage over a zero capital base".to_string(),
        ));
    }

    let profit_loss_percent = total_profit_loss / capital_base * 100.0;

    Ok(PortfolioSummary {
        starting_capital,
        total_equity,
        total_profit_loss,
        profit_loss_percent,
    })
}
