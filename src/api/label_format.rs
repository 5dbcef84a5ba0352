use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::unix_millis_to_datetime;

/// Tooltip header for the price chart, e.g. `Mar 05 14:30`.
pub const PRICE_TOOLTIP_TIME_PATTERN: &str = "%b %d %H:%M";
/// Bottom-axis tick of the bar chart, e.g. `04/24`.
pub const BAR_AXIS_TICK_PATTERN: &str = "%m/%d";
/// Tooltip header for the bar chart, e.g. `Apr 24, 07`.
pub const BAR_TOOLTIP_DATE_PATTERN: &str = "%b %d, %y";

/// Formats a unix-millis timestamp in UTC.
#[must_use]
pub fn format_time_millis(millis: f64, pattern: &str) -> String {
    match unix_millis_to_datetime(millis) {
        Some(dt) => dt.format(pattern).to_string(),
        None => "nan".to_owned(),
    }
}

/// Formats an RFC 3339 category label as a date; unparsable labels are
/// returned as-is.
#[must_use]
pub fn format_date_label(label: &str, pattern: &str) -> String {
    match DateTime::parse_from_rfc3339(label) {
        Ok(dt) => dt.with_timezone(&Utc).format(pattern).to_string(),
        Err(_) => label.to_owned(),
    }
}

/// US-dollar currency text: `$` prefix, comma grouping, two decimals with
/// half-away-from-zero rounding.
#[must_use]
pub fn format_usd(value: f64) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return "nan".to_owned();
    };
    let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let text = magnitude.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}${}.{fraction}", group_thousands(integer))
}

/// Plain numeric value text, shortest round-trip representation.
#[must_use]
pub fn format_plain_value(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    format!("{value}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_and_rounds() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(67_891.234), "$67,891.23");
        assert_eq!(format_usd(0.005), "$0.01");
        assert_eq!(format_usd(-1_000_000.0), "-$1,000,000.00");
        assert_eq!(format_usd(999.0), "$999.00");
    }

    #[test]
    fn date_label_falls_back_to_raw_text() {
        assert_eq!(format_date_label("not-a-date", BAR_AXIS_TICK_PATTERN), "not-a-date");
        assert_eq!(
            format_date_label("2007-04-24T07:00:00.000Z", BAR_AXIS_TICK_PATTERN),
            "04/24"
        );
    }
}
