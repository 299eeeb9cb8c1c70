use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::TradingError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub feed: FeedConfig,
    pub trading: TradingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// "binance" for the live REST feed, "fixture" for the deterministic tape.
    pub source: String,
    pub base_url: String,
    pub symbol: String,
    pub interval: String,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingConfig {
    pub starting_capital: f64,
    pub default_quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub fn load() -> Result<Self, TradingError> {
        // Try to load from config.json
        let config_path = Path::new("config.json");

        if config_path.exists() {
            let mut file = File::open(config_path)
                .map_err(|e| TradingError::ConfigError(format!("Failed to open config file: {}", e)))?;

            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| TradingError::ConfigError(format!("Failed to read config file: {}", e)))?;

            let mut cfg: Config = serde_json::from_str(&contents)
                .map_err(|e| TradingError::ConfigError(format!("Failed to parse config file: {}", e)))?;
            // environment overrides
            cfg.apply_env_overrides();
            Ok(cfg)
        } else {
            // Return default configuration
            let mut cfg = Config::default();
            cfg.apply_env_overrides();
            Ok(cfg)
        }
    }

    /// Apply environment variable overrides for runtime fields
    fn apply_env_overrides(&mut self) {
        use std::env;
        if let Ok(v) = env::var("FEED_SOURCE") { if !v.is_empty() { self.feed.source = v; } }
        if let Ok(v) = env::var("FEED_BASE_URL") { if !v.is_empty() { self.feed.base_url = v; } }
        if let Ok(v) = env::var("FEED_SYMBOL") { if !v.is_empty() { self.feed.symbol = v; } }
        if let Ok(v) = env::var("STARTING_CAPITAL") {
            if let Ok(capital) = v.parse::<f64>() { self.trading.starting_capital = capital; }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed: FeedConfig {
                source: "fixture".to_string(),
                base_url: "https://api.binance.com".to_string(),
                symbol: "BTCUSDT".to_string(),
                interval: "1m".to_string(),
                timeout_ms: Some(5000),
            },
            trading: TradingConfig {
                starting_capital: 10000.0,
                default_quantity: 0.01,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
