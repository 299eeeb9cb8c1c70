//! Binance spot REST price feed (klines endpoint, minimal subset).

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::config::FeedConfig;
use crate::error::TradingError;
use crate::feed::PriceFeed;
use crate::models::price::PriceTick;

pub struct BinanceFeed {
    base_url: String,
    symbol: String,
    interval: String,
    http: reqwest::Client,
}

impl BinanceFeed {
    pub fn new(
        base_url: impl Into<String>,
        symbol: impl Into<String>,
        interval: impl Into<String>,
        timeout_ms: Option<u64>,
    ) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        BinanceFeed {
            base_url: base_url.into(),
            symbol: symbol.into(),
            interval: interval.into(),
            http: builder.build().unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(
            &config.base_url,
            &config.symbol,
            &config.interval,
            config.timeout_ms,
        )
    }

    /// Klines rows carry numeric fields as strings; index 1 is the open,
    /// index 4 the close.
    fn parse_kline_price(row: &[Value], index: usize) -> Result<f64, TradingError> {
        let field = row
            .get(index)
            .and_then(|v| v.as_str())
            .ok_or_else(|| TradingError::ParseError(format!("missing kline field {}", index)))?;
        field
            .parse::<f64>()
            .map_err(|e| TradingError::ParseError(format!("bad kline price: {}", e)))
    }
}

#[async_trait]
impl PriceFeed for BinanceFeed {
    async fn latest_price(&self) -> Result<PriceTick, TradingError> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit=1",
            self.base_url, self.symbol, self.interval
        );

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TradingError::FeedError(format!("klines http error: {}", e)))?;

        if !res.status().is_success() {
            return Err(TradingError::FeedError(format!(
                "klines request failed: {}",
                res.status()
            )));
        }

        let rows: Vec<Vec<Value>> = res
            .json()
            .await
            .map_err(|e| TradingError::FeedError(format!("klines body error: {}", e)))?;

        let row = rows
            .last()
            .ok_or_else(|| TradingError::FeedError("empty klines response".to_string()))?;

        let open = Self::parse_kline_price(row, 1)?;
        let close = Self::parse_kline_price(row, 4)?;

        if close <= 0.0 {
            return Err(TradingError::InvalidPrice(close));
        }

        let change_percent = if open > 0.0 {
            Some((close / open - 1.0) * 100.0)
        } else {
            None
        };

        Ok(PriceTick {
            price: close,
            change_percent,
            timestamp: Utc::now(),
        })
    }
}
