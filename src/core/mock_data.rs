//! Static sample data used by the stock bar chart.

use crate::core::{CategoryPoint, CategorySeries};
use crate::error::ChartResult;

const APPLE_STOCK_SAMPLE: [(&str, f64); 10] = [
    ("2007-04-24T07:00:00.000Z", 93.24),
    ("2007-04-25T07:00:00.000Z", 95.35),
    ("2007-04-26T07:00:00.000Z", 98.84),
    ("2007-04-27T07:00:00.000Z", 99.92),
    ("2007-04-30T07:00:00.000Z", 99.8),
    ("2007-05-01T07:00:00.000Z", 99.47),
    ("2007-05-02T07:00:00.000Z", 100.39),
    ("2007-05-03T07:00:00.000Z", 100.4),
    ("2007-05-04T07:00:00.000Z", 100.81),
    ("2007-05-07T07:00:00.000Z", 103.92),
];

/// First ten daily closes of the classic Apple stock sample, keyed by
/// RFC 3339 date.
pub fn apple_stock_sample() -> ChartResult<CategorySeries> {
    CategorySeries::new(
        APPLE_STOCK_SAMPLE
            .iter()
            .map(|(date, close)| CategoryPoint::new(*date, *close))
            .collect(),
    )
}
