//! Price feed selection and fixture behavior.

use papertrade::config::Config;
use papertrade::feed::{self, FixtureFeed, PriceFeed};
use papertrade::TradingError;

#[tokio::test]
async fn fixture_feed_is_deterministic() {
    let a = FixtureFeed::new();
    let b = FixtureFeed::new();

    for _ in 0..10 {
        let tick_a = a.latest_price().await.unwrap();
        let tick_b = b.latest_price().await.unwrap();
        assert_eq!(tick_a.price, tick_b.price);
        assert!(tick_a.price > 0.0);
    }
}

#[tokio::test]
async fn fixture_reports_change_between_ticks() {
    let feed = FixtureFeed::with_tape(vec![100.0, 110.0]);

    let first = feed.latest_price().await.unwrap();
    assert!(first.change_percent.is_none());

    let second = feed.latest_price().await.unwrap();
    let change = second.change_percent.unwrap();
    assert!((change - 10.0).abs() < 1e-9);
}

#[test]
fn config_selects_fixture_feed() {
    let config = Config::default();
    assert_eq!(config.feed.source, "fixture");
    assert!(feed::from_config(&config).is_ok());
}

#[test]
fn config_selects_binance_feed() {
    let mut config = Config::default();
    config.feed.source = "binance".to_string();
    assert!(feed::from_config(&config).is_ok());
}

#[test]
fn unknown_feed_source_is_rejected() {
    let mut config = Config::default();
    config.feed.source = "random".to_string();

    assert!(matches!(
        feed::from_config(&config),
        Err(TradingError::ConfigError(_))
    ));
}

#[tokio::test]
async fn engine_consumes_feed_ticks() {
    use papertrade::engine::PaperTradingEngine;
    use papertrade::models::position::Side;

    let feed = FixtureFeed::with_tape(vec![42500.0, 43000.0]);
    let mut engine = PaperTradingEngine::new(10000.0);

    let entry = feed.latest_price().await.unwrap();
    let position = engine.open_position(Side::Long, 0.01, entry.price).unwrap();

    let mark = feed.latest_price().await.unwrap();
    let summary = engine.summary(mark.price).unwrap();
    assert!((summary.total_profit_loss - 5.0).abs() < 1e-9);

    engine.close_position(&position.id, mark.price).unwrap();
    assert_eq!(engine.history().len(), 1);
}
