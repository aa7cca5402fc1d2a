//! Formatting helpers for dashboard display.
//!
//! The dashboard shows one clock label per event. All-day events render
//! as a fixed label; timed events render as a 12-hour clock time with an
//! AM/PM suffix and no leading zero on the hour, in the UTC offset the
//! provider supplied.

use crate::time::EventTime;

/// Title used when the provider sends an event without a summary.
pub const DEFAULT_TITLE: &str = "Busy";

/// Clock label used for all-day events.
pub const ALL_DAY_LABEL: &str = "All Day";

/// Renders the clock label for an event start.
pub fn clock_label(start: &EventTime) -> String {
    match start {
        EventTime::AllDay(_) => ALL_DAY_LABEL.to_string(),
        EventTime::DateTime(dt) => dt.format("%-I:%M %p").to_string(),
    }
}

/// Returns the display title for an optional event summary.
///
/// Only an absent summary falls back to [`DEFAULT_TITLE`]; a present but
/// empty string is kept as-is.
pub fn effective_title(summary: Option<&str>) -> &str {
    summary.unwrap_or(DEFAULT_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate};

    fn timed(rfc3339: &str) -> EventTime {
        EventTime::from_offset(DateTime::parse_from_rfc3339(rfc3339).unwrap())
    }

    fn all_day(y: i32, m: u32, d: u32) -> EventTime {
        EventTime::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    mod clock_label {
        use super::*;

        #[test]
        fn all_day_label() {
            assert_eq!(clock_label(&all_day(2025, 2, 5)), "All Day");
        }

        #[test]
        fn morning_has_no_leading_zero() {
            assert_eq!(clock_label(&timed("2025-02-05T09:30:00-05:00")), "9:30 AM");
        }

        #[test]
        fn afternoon() {
            assert_eq!(clock_label(&timed("2025-02-05T16:00:00+00:00")), "4:00 PM");
        }

        #[test]
        fn noon_and_midnight_render_as_twelve() {
            assert_eq!(clock_label(&timed("2025-02-05T12:00:00+00:00")), "12:00 PM");
            assert_eq!(clock_label(&timed("2025-02-05T00:05:00+00:00")), "12:05 AM");
        }

        #[test]
        fn minutes_keep_their_zero_padding() {
            assert_eq!(clock_label(&timed("2025-02-05T10:05:00+00:00")), "10:05 AM");
        }

        #[test]
        fn renders_in_the_providers_offset() {
            // 09:30 in -05:00 is 14:30 UTC; the label must stay 9:30.
            assert_eq!(clock_label(&timed("2025-02-05T09:30:00-05:00")), "9:30 AM");
            assert_eq!(clock_label(&timed("2025-02-05T23:15:00+09:00")), "11:15 PM");
        }
    }

    mod effective_title {
        use super::*;

        #[test]
        fn present_title_is_kept() {
            assert_eq!(effective_title(Some("Standup")), "Standup");
        }

        #[test]
        fn absent_title_becomes_busy() {
            assert_eq!(effective_title(None), "Busy");
        }

        #[test]
        fn empty_title_is_not_replaced() {
            assert_eq!(effective_title(Some("")), "");
        }
    }
}
