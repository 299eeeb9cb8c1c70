//! Deterministic fixture feed.
//!
//! Replays a fixed price tape, cycling when exhausted. Used when no live
//! feed is configured, and in tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::TradingError;
use crate::feed::PriceFeed;
use crate::models::price::PriceTick;

/// Price tape anchored on the historical demo reference of 42500.
const PRICE_TAPE: [f64; 8] = [
    42500.0, 42725.0, 42610.0, 42380.0, 42940.0, 43120.0, 42870.0, 42655.0,
];

pub struct FixtureFeed {
    tape: Vec<f64>,
    cursor: AtomicUsize,
}

impl FixtureFeed {
    pub fn new() -> Self {
        Self::with_tape(PRICE_TAPE.to_vec())
    }

    pub fn with_tape(tape: Vec<f64>) -> Self {
        FixtureFeed {
            tape,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Default for FixtureFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceFeed for FixtureFeed {
    async fn latest_price(&self) -> Result<PriceTick, TradingError> {
        if self.tape.is_empty() {
            return Err(TradingError::FeedError("empty fixture tape".to_string()));
        }

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.tape.len();
        let price = self.tape[index];

        let change_percent = if index > 0 {
            let previous = self.tape[index - 1];
            Some((price / previous - 1.0) * 100.0)
        } else {
            None
        };

        Ok(PriceTick {
            price,
            change_percent,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_the_tape_in_order() {
        let feed = FixtureFeed::with_tape(vec![100.0, 110.0, 105.0]);

        assert_eq!(feed.latest_price().await.unwrap().price, 100.0);
        assert_eq!(feed.latest_price().await.unwrap().price, 110.0);
        assert_eq!(feed.latest_price().await.unwrap().price, 105.0);
        // wraps around
        assert_eq!(feed.latest_price().await.unwrap().price, 100.0);
    }

    #[tokio::test]
    async fn default_tape_is_positive() {
        let feed = FixtureFeed::new();
        for _ in 0..PRICE_TAPE.len() {
            assert!(feed.latest_price().await.unwrap().price > 0.0);
        }
    }

    #[tokio::test]
    async fn empty_tape_is_an_error() {
        let feed = FixtureFeed::with_tape(Vec::new());
        assert!(matches!(
            feed.latest_price().await,
            Err(TradingError::FeedError(_))
        ));
    }
}
