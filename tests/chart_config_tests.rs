use pricechart::api::{BarChartConfig, PriceChartConfig, measured_or_default};
use pricechart::core::Viewport;
use pricechart::feed::{DEFAULT_BASE_URL, FeedConfig, MarketChartRequest};

#[test]
fn price_config_json_round_trip() {
    let config = PriceChartConfig::new(Viewport::new(640, 320)).with_value_padding(5.0);
    let json = config.to_json_pretty().expect("serialize");
    let restored = PriceChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_take_demo_defaults() {
    let bar = BarChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(bar, BarChartConfig::default());
    assert_eq!(bar.viewport, Viewport::new(100, 100));
    assert_eq!(bar.margin, 32.0);
    assert_eq!(bar.band_padding, 0.2);
    assert_eq!(bar.value_padding, 1.0);

    let price = PriceChartConfig::from_json_str(r#"{"viewport":{"width":300,"height":150}}"#)
        .expect("parse");
    assert_eq!(price.viewport, Viewport::new(300, 150));
    assert_eq!(price.value_padding, 0.0);
}

#[test]
fn invalid_configs_are_rejected_on_load() {
    assert!(BarChartConfig::from_json_str(r#"{"band_padding":1.0}"#).is_err());
    assert!(BarChartConfig::from_json_str(r#"{"margin":-2.0}"#).is_err());
    assert!(
        PriceChartConfig::from_json_str(r#"{"viewport":{"width":0,"height":10}}"#).is_err()
    );
    assert!(PriceChartConfig::from_json_str("not json").is_err());
}

#[test]
fn measured_size_falls_back_per_dimension() {
    assert_eq!(measured_or_default(Viewport::new(0, 250)), Viewport::new(100, 250));
    assert_eq!(measured_or_default(Viewport::new(420, 0)), Viewport::new(420, 100));
    assert_eq!(measured_or_default(Viewport::new(5, 6)), Viewport::new(5, 6));
}

#[test]
fn feed_config_defaults_to_bitcoin_week_in_usd() {
    let config: FeedConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.request, MarketChartRequest::default());
    assert_eq!(
        config.request.url(&config.base_url).expect("url").as_str(),
        "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=7"
    );
}
