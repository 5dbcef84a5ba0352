use chrono::{TimeZone, Utc};
use pricechart::core::{CategoryPoint, CategorySeries, DataPoint, Series, apple_stock_sample};
use pricechart::error::ChartError;
use rust_decimal::Decimal;

#[test]
fn empty_series_is_rejected() {
    assert!(matches!(Series::new(Vec::new()), Err(ChartError::EmptySeries)));
    assert!(matches!(
        CategorySeries::new(Vec::new()),
        Err(ChartError::EmptySeries)
    ));
}

#[test]
fn duplicate_or_descending_times_are_rejected() {
    let duplicate = Series::new(vec![
        DataPoint::new(1.0, 1.0),
        DataPoint::new(2.0, 1.0),
        DataPoint::new(2.0, 1.0),
    ]);
    assert!(matches!(duplicate, Err(ChartError::UnsortedSeries { index: 2 })));

    let descending = Series::new(vec![DataPoint::new(5.0, 1.0), DataPoint::new(4.0, 1.0)]);
    assert!(matches!(descending, Err(ChartError::UnsortedSeries { index: 1 })));
}

#[test]
fn non_finite_points_are_rejected() {
    let result = Series::new(vec![DataPoint::new(1.0, f64::NAN)]);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn extents_follow_observed_data() {
    let series = Series::new(vec![
        DataPoint::new(0.0, 10.0),
        DataPoint::new(10.0, 20.0),
        DataPoint::new(20.0, 15.0),
    ])
    .expect("valid series");

    assert_eq!(series.time_extent(), (0.0, 20.0));
    assert_eq!(series.value_extent(), (10.0, 20.0));
    assert_eq!(series.len(), 3);
}

#[test]
fn bisect_left_returns_first_not_less() {
    let series = Series::new(vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(10.0, 1.0),
        DataPoint::new(20.0, 1.0),
    ])
    .expect("valid series");

    assert_eq!(series.bisect_left(-5.0), 0);
    assert_eq!(series.bisect_left(0.0), 0);
    assert_eq!(series.bisect_left(0.5), 1);
    assert_eq!(series.bisect_left(10.0), 1);
    assert_eq!(series.bisect_left(20.0), 2);
    assert_eq!(series.bisect_left(25.0), 3);
}

#[test]
fn data_point_from_datetime_uses_millis() {
    let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().expect("valid time");
    let point = DataPoint::from_datetime(time, Decimal::new(4_210_050, 2)).expect("point");

    assert_eq!(point.time, 1_704_164_645_000.0);
    assert!((point.value - 42_100.50).abs() <= 1e-9);
}

#[test]
fn category_series_keeps_order_and_rejects_duplicates() {
    let series = CategorySeries::new(vec![
        CategoryPoint::new("b", 2.0),
        CategoryPoint::new("a", 1.0),
    ])
    .expect("valid categories");
    assert_eq!(series.labels().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(series.index_of("a"), Some(1));
    assert_eq!(series.value_extent(), (1.0, 2.0));

    let duplicate = CategorySeries::new(vec![
        CategoryPoint::new("a", 1.0),
        CategoryPoint::new("a", 2.0),
    ]);
    assert!(duplicate.is_err());
}

#[test]
fn apple_sample_has_ten_closes() {
    let sample = apple_stock_sample().expect("sample");
    assert_eq!(sample.len(), 10);
    assert_eq!(sample.value_extent(), (93.24, 103.92));
    assert_eq!(
        sample.get(0).map(|p| p.label),
        Some("2007-04-24T07:00:00.000Z".to_owned())
    );
}
