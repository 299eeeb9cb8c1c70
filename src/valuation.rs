//! Position valuation.
//!
//! Pure profit/loss arithmetic against a mark price. The mark is the live
//! price for an open position and the frozen close price for a closed one.

use crate::error::TradingError;
use crate::models::position::{Position, Side};

/// Price a position is valued against: live price if open, fixed close
/// price if closed.
pub fn mark_price(position: &Position, current_price: f64) -> Result<f64, TradingError> {
    if position.is_closed() {
        position.close_price.ok_or_else(|| {
            TradingError::InvalidState(format!(
                "closed position {} has no close price",
                position.id
            ))
        })
    } else {
        Ok(current_price)
    }
}

/// Unrealized (open) or realized (closed) profit/loss in quote currency.
pub fn profit_loss(position: &Position, current_price: f64) -> Result<f64, TradingError> {
    let mark = mark_price(position, current_price)?;
    validate(position, mark)?;

    let pnl = match position.side {
        Side::Long => (mark - position.entry_price) * position.quantity,
        Side::Short => (position.entry_price - mark) * position.quantity,
    };

    Ok(pnl)
}

/// Profit/loss relative to the entry, in percent.
pub fn profit_loss_percent(position: &Position, current_price: f64) -> Result<f64, TradingError> {
    let mark = mark_price(position, current_price)?;
    validate(position, mark)?;

    let percent = match position.side {
        Side::Long => (mark / position.entry_price - 1.0) * 100.0,
        Side::Short => (position.entry_price / mark - 1.0) * 100.0,
    };

    Ok(percent)
}

fn validate(position: &Position, mark: f64) -> Result<(), TradingError> {
    if position.entry_price <= 0.0 {
        return Err(TradingError::InvalidPrice(position.entry_price));
    }
    if mark <= 0.0 {
        return Err(TradingError::InvalidPrice(mark));
    }
    if position.quantity <= 0.0 {
        return Err(TradingError::InvalidQuantity(position.quantity));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn open_position(side: Side, quantity: f64, entry_price: f64) -> Position {
        Position::open(side, quantity, entry_price)
    }

    #[rstest]
    #[case(Side::Long, 0.1, 40000.0, 44000.0, 400.0)]
    #[case(Side::Long, 0.1, 40000.0, 38000.0, -200.0)]
    #[case(Side::Short, 0.05, 43000.0, 41000.0, 100.0)]
    #[case(Side::Short, 0.05, 43000.0, 45000.0, -100.0)]
    fn profit_loss_by_side(
        #[case] side: Side,
        #[case] quantity: f64,
        #[case] entry: f64,
        #[case] mark: f64,
        #[case] expected: f64,
    ) {
        let position = open_position(side, quantity, entry);
        let pnl = profit_loss(&position, mark).unwrap();
        assert!((pnl - expected).abs() < 1e-9);
    }

    #[test]
    fn breakeven_is_zero() {
        let position = open_position(Side::Long, 0.5, 42500.0);
        assert_eq!(profit_loss(&position, 42500.0).unwrap(), 0.0);
        assert_eq!(profit_loss_percent(&position, 42500.0).unwrap(), 0.0);
    }

    #[test]
    fn long_pnl_increases_with_mark() {
        let position = open_position(Side::Long, 0.1, 40000.0);
        let marks = [39000.0, 40000.0, 41000.0, 44000.0, 50000.0];
        let pnls: Vec<f64> = marks
            .iter()
            .map(|m| profit_loss(&position, *m).unwrap())
            .collect();
        assert!(pnls.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn short_pnl_decreases_with_mark() {
        let position = open_position(Side::Short, 0.1, 40000.0);
        let marks = [39000.0, 40000.0, 41000.0, 44000.0];
        let pnls: Vec<f64> = marks
            .iter()
            .map(|m| profit_loss(&position, *m).unwrap())
            .collect();
        assert!(pnls.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn closed_position_ignores_live_price() {
        let mut position = open_position(Side::Short, 0.05, 43000.0);
        position.close(41000.0, Utc::now()).unwrap();

        let at_low = profit_loss(&position, 20000.0).unwrap();
        let at_high = profit_loss(&position, 90000.0).unwrap();
        assert_eq!(at_low, at_high);
        assert!((at_low - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percent_matches_long_formula() {
        let position = open_position(Side::Long, 0.1, 40000.0);
        let percent = profit_loss_percent(&position, 44000.0).unwrap();
        assert!((percent - 10.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, 44000.0, 0.1)]
    #[case(-100.0, 44000.0, 0.1)]
    #[case(40000.0, 0.0, 0.1)]
    #[case(40000.0, -1.0, 0.1)]
    fn rejects_non_positive_prices(#[case] entry: f64, #[case] mark: f64, #[case] qty: f64) {
        let position = open_position(Side::Long, qty, entry);
        assert!(matches!(
            profit_loss(&position, mark),
            Err(TradingError::InvalidPrice(_))
        ));
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let position = open_position(Side::Long, 0.0, 40000.0);
        assert!(matches!(
            profit_loss(&position, 44000.0),
            Err(TradingError::InvalidQuantity(_))
        ));
    }
}
