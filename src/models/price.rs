use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest reference price for the traded asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTick {
    pub price: f64,
    pub change_percent: Option<f64>,
    pub timestamp: DateTime<Utc>,
}
