//! Shared formatting utilities for size display and console output

use console::Emoji;

use crate::snapshot::storage::SizeMeasurement;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Glyph marking a size decrease in report rows
pub const DECREASE: &str = "\u{25BC}";

/// Glyph marking a size increase in report rows
pub const INCREASE: &str = "\u{25B2}";

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format bytes as a human-readable size string
///
/// Picks the largest base-1024 unit for which the scaled value is at least
/// one, renders it with `decimals` fractional digits, and trims trailing
/// zeros. Zero always renders as `"0 B"`.
///
/// # Examples
///
/// ```
/// use size_snap::fmt::format_bytes;
///
/// assert_eq!(format_bytes(0, 2), "0 B");
/// assert_eq!(format_bytes(512, 2), "512 B");
/// assert_eq!(format_bytes(1024, 2), "1 KB");
/// assert_eq!(format_bytes(1536, 1), "1.5 KB");
/// ```
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = ((bytes as f64).log2() / 10.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut value = format!("{scaled:.decimals$}");
    if value.contains('.') {
        value.truncate(value.trim_end_matches('0').trim_end_matches('.').len());
    }
    format!("{} {}", value, UNITS[exponent])
}

/// Signed percent change between the two endpoints of a measurement
///
/// Returns `None` when either endpoint is zero (no baseline to compare
/// against) or when the endpoints are equal. The magnitude is the relative
/// change of the larger value over the smaller, rounded to two decimal
/// places; the sign is positive for growth and negative for shrinkage.
/// Severity bucketing compares the unsigned magnitude only.
pub fn percent_delta(m: &SizeMeasurement) -> Option<f64> {
    if m.previous == 0 || m.current == 0 || m.previous == m.current {
        return None;
    }

    let (larger, smaller) = if m.current > m.previous {
        (m.current as f64, m.previous as f64)
    } else {
        (m.previous as f64, m.current as f64)
    };
    let magnitude = ((larger / smaller - 1.0) * 100.0 * 100.0).round() / 100.0;

    if m.current > m.previous {
        Some(magnitude)
    } else {
        Some(-magnitude)
    }
}

/// Render a measurement's change as a directional glyph plus byte delta
///
/// `"-"` when the measurement is unchanged; otherwise `▼`/`▲`, the absolute
/// byte delta, and a signed percent suffix when the percentage is defined:
///
/// ```
/// use size_snap::fmt::render_change;
/// use size_snap::snapshot::SizeMeasurement;
///
/// let grew = SizeMeasurement { previous: 1000, current: 1300 };
/// assert_eq!(render_change(&grew), "▲ 300 B +30%");
///
/// let appeared = SizeMeasurement { previous: 0, current: 50 };
/// assert_eq!(render_change(&appeared), "▲ 50 B");
/// ```
pub fn render_change(m: &SizeMeasurement) -> String {
    use std::cmp::Ordering;

    // The suffix sign is the direction indicator, not the delta's own sign;
    // a shrinkage whose magnitude rounds to zero still prints as "-0%".
    let suffix = match percent_delta(m) {
        Some(percent) => {
            let sign = if m.current > m.previous { '+' } else { '-' };
            format!(" {sign}{}%", percent.abs())
        }
        None => String::new(),
    };

    match m.current.cmp(&m.previous) {
        Ordering::Equal => "-".to_string(),
        Ordering::Greater => {
            format!(
                "{INCREASE} {}{suffix}",
                format_bytes(m.current - m.previous, 2)
            )
        }
        Ordering::Less => {
            format!(
                "{DECREASE} {}{suffix}",
                format_bytes(m.previous - m.current, 2)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_zero_is_literal() {
        assert_eq!(format_bytes(0, 2), "0 B");
        assert_eq!(format_bytes(0, 0), "0 B");
    }

    #[test]
    fn test_format_bytes_various_sizes() {
        assert_eq!(format_bytes(512, 2), "512 B");
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(1536, 1), "1.5 KB");
        assert_eq!(format_bytes(1_048_576, 2), "1 MB");
        assert_eq!(format_bytes(2_621_440, 2), "2.5 MB");
    }

    #[test]
    fn test_format_bytes_trims_trailing_zeros_only_after_point() {
        assert_eq!(format_bytes(1300, 2), "1.27 KB");
        assert_eq!(format_bytes(100, 0), "100 B");
        assert_eq!(format_bytes(1_073_741_824, 2), "1 GB");
    }

    #[test]
    fn test_percent_delta_undefined_without_baseline() {
        assert_eq!(
            percent_delta(&SizeMeasurement {
                previous: 0,
                current: 50
            }),
            None
        );
        assert_eq!(
            percent_delta(&SizeMeasurement {
                previous: 50,
                current: 0
            }),
            None
        );
    }

    #[test]
    fn test_percent_delta_undefined_when_unchanged() {
        assert_eq!(
            percent_delta(&SizeMeasurement {
                previous: 100,
                current: 100
            }),
            None
        );
    }

    #[test]
    fn test_percent_delta_signed_by_direction() {
        assert_eq!(
            percent_delta(&SizeMeasurement {
                previous: 100,
                current: 150
            }),
            Some(50.0)
        );
        assert_eq!(
            percent_delta(&SizeMeasurement {
                previous: 150,
                current: 100
            }),
            Some(-50.0)
        );
    }

    #[test]
    fn test_percent_delta_rounds_to_two_places() {
        assert_eq!(
            percent_delta(&SizeMeasurement {
                previous: 300,
                current: 400
            }),
            Some(33.33)
        );
    }

    #[test]
    fn test_render_change_unchanged_is_dash() {
        assert_eq!(
            render_change(&SizeMeasurement {
                previous: 100,
                current: 100
            }),
            "-"
        );
        assert_eq!(
            render_change(&SizeMeasurement {
                previous: 0,
                current: 0
            }),
            "-"
        );
    }

    #[test]
    fn test_render_change_increase_with_percent() {
        assert_eq!(
            render_change(&SizeMeasurement {
                previous: 1000,
                current: 1300
            }),
            "▲ 300 B +30%"
        );
    }

    #[test]
    fn test_render_change_decrease_with_percent() {
        assert_eq!(
            render_change(&SizeMeasurement {
                previous: 1300,
                current: 1000
            }),
            "▼ 300 B -30%"
        );
    }

    #[test]
    fn test_render_change_byte_only_when_percent_undefined() {
        assert_eq!(
            render_change(&SizeMeasurement {
                previous: 0,
                current: 2048
            }),
            "▲ 2 KB"
        );
        assert_eq!(
            render_change(&SizeMeasurement {
                previous: 2048,
                current: 0
            }),
            "▼ 2 KB"
        );
    }
}
