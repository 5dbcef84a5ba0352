use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{DataPoint, Series, TimeScale, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Data point picked for a pointer position, with the tooltip anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPoint {
    pub index: usize,
    pub point: DataPoint,
    /// Pointer x, unchanged.
    pub tooltip_left: f64,
    /// Resolved value projected through the value axis.
    pub tooltip_top: f64,
}

/// Picks the point nearest (by time) to the time under `pointer_x`.
///
/// Only the two points bracketing the inverted time are considered. Their
/// indices are clamped to the series bounds, so a pointer before the first
/// point or after the last one resolves to that edge point. At an exact
/// midpoint the earlier point wins.
pub fn resolve_nearest(
    series: &Series,
    time_scale: TimeScale,
    value_scale: ValueScale,
    pointer_x: f64,
) -> ChartResult<ResolvedPoint> {
    if !pointer_x.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer x must be finite".to_owned(),
        ));
    }

    let x0 = time_scale.pixel_to_time(pointer_x)?;
    let index = nearest_index(series, x0);
    let point = series.points()[index];
    let tooltip_top = value_scale.value_to_pixel(point.value)?;
    trace!(pointer_x, x0, index, "resolved nearest point");

    Ok(ResolvedPoint {
        index,
        point,
        tooltip_left: pointer_x,
        tooltip_top,
    })
}

/// Bisection lookup of the bracketing pair around `time`.
#[must_use]
pub fn nearest_index(series: &Series, time: f64) -> usize {
    let len = series.len();
    if len == 1 {
        return 0;
    }

    let right = series.bisect_left(time).clamp(1, len - 1);
    let points = series.points();
    // Left goes first so an exact tie keeps the earlier point.
    let candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = [right - 1, right]
        .into_iter()
        .map(|index| (OrderedFloat((points[index].time - time).abs()), index))
        .collect();

    candidates
        .into_iter()
        .min_by_key(|item| item.0)
        .map_or(right - 1, |(_, index)| index)
}

/// Linear scan over every point; reference for [`nearest_index`].
///
/// Ties resolve to the earliest point.
#[must_use]
pub fn nearest_index_bruteforce(series: &Series, time: f64) -> usize {
    series
        .points()
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| OrderedFloat((point.time - time).abs()))
        .map_or(0, |(index, _)| index)
}
