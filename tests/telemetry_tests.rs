use pricechart::telemetry::{init_default_tracing, init_tracing_with_filter};

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_noop_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("pricechart=debug"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_succeeds_only_once() {
    assert!(init_tracing_with_filter("pricechart=debug"));
    assert!(!init_default_tracing());
}
