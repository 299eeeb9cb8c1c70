use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::TradingError;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, Hash, PartialEq)]
pub struct PositionId(pub String);

impl PositionId {
    pub fn generate() -> Self {
        PositionId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a position. Serialized with the wire spellings the trade
/// submission endpoint uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    #[serde(rename = "BUY")]
    Long,
    #[serde(rename = "SELL")]
    Short,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "BUY"),
            Side::Short => write!(f, "SELL"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PositionStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "CLOSED")]
    Closed,
}

/// A single simulated exposure, tracked from open to close.
///
/// Invariant: `close_price` and `closed_at` are both present iff the status
/// is `Closed`; `entry_price` and `quantity` never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub side: Side,
    pub entry_price: f64,
    pub quantity: f64,
    pub status: PositionStatus,
    pub opened_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_price: Option<f64>,
}

impl Position {
    pub fn open(side: Side, quantity: f64, entry_price: f64) -> Self {
        Position {
            id: PositionId::generate(),
            side,
            entry_price,
            quantity,
            status: PositionStatus::Open,
            opened_at: Utc::now(),
            closed_at: None,
            close_price: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PositionStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == PositionStatus::Closed
    }

    /// Notional value at entry (quantity x entry price).
    pub fn trade_value(&self) -> f64 {
        self.entry_price * self.quantity
    }

    /// Transition OPEN -> CLOSED, fixing the close price and timestamp.
    /// There is no reopening transition; a second close is rejected.
    pub fn close(&mut self, close_price: f64, closed_at: DateTime<Utc>) -> Result<(), TradingError> {
        if self.is_closed() {
            return Err(TradingError::InvalidState(format!(
                "position {} is already closed",
                self.id
            )));
        }

        self.status = PositionStatus::Closed;
        self.close_price = Some(close_price);
        self.closed_at = Some(closed_at);
        Ok(())
    }
}
