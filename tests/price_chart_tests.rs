use pricechart::api::{PriceChart, PriceChartConfig};
use pricechart::core::{DataPoint, Series, Viewport};
use pricechart::error::ChartError;
use pricechart::feed::{FeedError, QueryState};
use pricechart::interaction::PointerEvent;

fn chart_with_three_points() -> PriceChart {
    let series = Series::new(vec![
        DataPoint::new(0.0, 10.0),
        DataPoint::new(10.0, 20.0),
        DataPoint::new(20.0, 15.0),
    ])
    .expect("valid series");
    PriceChart::with_series(PriceChartConfig::new(Viewport::new(100, 50)), series)
        .expect("chart init")
}

#[test]
fn pointer_move_shows_tooltip_at_resolved_point() {
    let mut chart = chart_with_three_points();

    let resolved = chart.pointer_move(51.0).expect("resolve");
    assert_eq!(resolved.point, DataPoint::new(10.0, 20.0));

    let tooltip = chart.tooltip();
    assert!(tooltip.is_visible());
    assert_eq!(tooltip.data(), Some(&DataPoint::new(10.0, 20.0)));
    assert_eq!(tooltip.left(), 51.0);
    assert_eq!(tooltip.top(), 0.0);
}

#[test]
fn pointer_leave_clears_tooltip() {
    let mut chart = chart_with_three_points();
    chart.pointer_move(10.0).expect("resolve");
    chart.pointer_leave();

    assert!(!chart.tooltip().is_visible());
    assert_eq!(chart.tooltip_label(), None);
}

#[test]
fn repeated_pointer_moves_are_idempotent() {
    let mut chart = chart_with_three_points();
    let first = chart.pointer_move(73.0).expect("first");
    let second = chart.pointer_move(73.0).expect("second");
    assert_eq!(first, second);
    assert_eq!(chart.tooltip().data(), Some(&first.point));
}

#[test]
fn pointer_events_dispatch_to_handlers() {
    let mut chart = chart_with_three_points();

    let moved = chart
        .handle_pointer(PointerEvent::Move { x: 99.0, y: 3.0 })
        .expect("move");
    assert_eq!(moved.map(|r| r.index), Some(2));

    let left = chart.handle_pointer(PointerEvent::Leave).expect("leave");
    assert_eq!(left, None);
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn chart_without_data_reports_empty_series() {
    let mut chart = PriceChart::new(PriceChartConfig::default()).expect("chart init");

    assert!(chart.time_scale().is_none());
    assert!(matches!(chart.pointer_move(10.0), Err(ChartError::EmptySeries)));
    assert!(chart.projected_points().expect("projection").is_empty());
}

#[test]
fn resize_recomputes_scales() {
    let mut chart = chart_with_three_points();
    chart.resize(Viewport::new(400, 200)).expect("resize");

    let time = chart.time_scale().expect("time scale");
    assert_eq!(time.time_to_pixel(10.0).expect("forward"), 200.0);
    let value = chart.value_scale().expect("value scale");
    assert_eq!(value.value_to_pixel(10.0).expect("bottom"), 200.0);

    let resolved = chart.pointer_move(201.0).expect("resolve");
    assert_eq!(resolved.index, 1);
}

#[test]
fn unmeasured_resize_falls_back_to_default_size() {
    let mut chart = chart_with_three_points();
    chart.resize(Viewport::new(0, 0)).expect("resize");
    assert_eq!(chart.viewport(), Viewport::new(100, 100));
}

#[test]
fn projected_points_follow_scales() {
    let chart = chart_with_three_points();
    let projected = chart.projected_points().expect("projection");

    let coords: Vec<(f64, f64)> = projected.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(coords, vec![(0.0, 50.0), (50.0, 0.0), (100.0, 25.0)]);
}

#[test]
fn replacing_series_hides_stale_tooltip() {
    let mut chart = chart_with_three_points();
    chart.pointer_move(50.0).expect("resolve");

    let replacement =
        Series::new(vec![DataPoint::new(100.0, 1.0), DataPoint::new(200.0, 2.0)]).expect("series");
    chart.set_series(replacement).expect("set series");

    assert!(!chart.tooltip().is_visible());
    assert_eq!(chart.time_scale().expect("scale").domain(), (100.0, 200.0));
}

#[test]
fn tooltip_label_formats_time_and_usd() {
    let series = Series::new(vec![
        DataPoint::new(1_700_000_000_000.0, 37_123.456),
        DataPoint::new(1_700_003_600_000.0, 37_200.0),
    ])
    .expect("series");
    let mut chart =
        PriceChart::with_series(PriceChartConfig::new(Viewport::new(600, 400)), series)
            .expect("chart init");

    chart.pointer_move(0.0).expect("resolve");
    assert_eq!(
        chart.tooltip_label().as_deref(),
        Some("Nov 14 22:13 : $37,123.46")
    );
}

#[test]
fn query_states_drive_chart_data() {
    let mut chart = PriceChart::new(PriceChartConfig::default()).expect("chart init");

    chart.apply_query_state(&QueryState::Loading).expect("loading");
    assert!(chart.series().is_none());

    let series =
        Series::new(vec![DataPoint::new(1.0, 1.0), DataPoint::new(2.0, 3.0)]).expect("series");
    chart
        .apply_query_state(&QueryState::Ready(series))
        .expect("ready");
    assert_eq!(chart.series().map(Series::len), Some(2));
    assert!(chart.pointer_move(10.0).is_ok());

    chart
        .apply_query_state(&QueryState::Failed(FeedError::Empty))
        .expect("failed");
    assert!(chart.series().is_none());
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn reset_drops_data_and_tooltip() {
    let mut chart = chart_with_three_points();
    chart.pointer_move(20.0).expect("resolve");
    chart.reset();

    assert!(chart.series().is_none());
    assert!(chart.value_scale().is_none());
    assert!(!chart.tooltip().is_visible());
}
