//! RawEvent to DisplayEvent conversion pipeline.
//!
//! This module handles the transformation from provider-supplied
//! [`RawEvent`] data to the [`DisplayEvent`] shape the dashboard renders.
//!
//! The mapping:
//! 1. Converts the raw start to an [`EventTime`]
//! 2. Resolves the title, falling back to `"Busy"` when the summary is absent
//! 3. Renders the clock label from the start, keeping all-day events as `"All Day"`
//! 4. Passes the provider's textual start value through unmodified

use dayboard_core::{DisplayEvent, EventTime};

use crate::raw_event::{RawEvent, RawEventTime};

/// Converts a [`RawEvent`] to a [`DisplayEvent`].
///
/// Timed events render their clock label in the offset the provider sent,
/// not in UTC, so a 09:30 meeting reads `"9:30 AM"` wherever it happens.
pub fn display_event(raw: &RawEvent) -> DisplayEvent {
    let start = convert_time(&raw.start);
    DisplayEvent::new(raw.summary.as_deref(), &start, raw.raw_start.clone())
}

/// Converts a slice of raw events, preserving provider order.
pub fn display_events(raw: &[RawEvent]) -> Vec<DisplayEvent> {
    raw.iter().map(display_event).collect()
}

/// Converts a [`RawEventTime`] to an [`EventTime`].
fn convert_time(raw: &RawEventTime) -> EventTime {
    match raw {
        RawEventTime::DateTime(dt) => EventTime::from_offset(*dt),
        RawEventTime::Date(date) => EventTime::from_date(*date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate};
    use dayboard_core::{ALL_DAY_LABEL, DEFAULT_TITLE, EVENT_COLOR};

    fn timed(raw_start: &str) -> RawEvent {
        let dt = DateTime::parse_from_rfc3339(raw_start).unwrap();
        RawEvent::new("timed", RawEventTime::DateTime(dt), raw_start)
    }

    fn all_day(raw_start: &str) -> RawEvent {
        let date = NaiveDate::parse_from_str(raw_start, "%Y-%m-%d").unwrap();
        RawEvent::new("all-day", RawEventTime::Date(date), raw_start)
    }

    #[test]
    fn timed_event_renders_in_provider_offset() {
        let event = display_event(&timed("2025-02-05T09:30:00-05:00").with_summary("Standup"));

        assert_eq!(event.title, "Standup");
        assert_eq!(event.time, "9:30 AM");
        assert!(!event.all_day);
        assert_eq!(event.raw_start, "2025-02-05T09:30:00-05:00");
        assert_eq!(event.color, EVENT_COLOR);
    }

    #[test]
    fn all_day_event_gets_label() {
        let event = display_event(&all_day("2025-02-05").with_summary("Offsite"));

        assert_eq!(event.time, ALL_DAY_LABEL);
        assert!(event.all_day);
        assert_eq!(event.raw_start, "2025-02-05");
    }

    #[test]
    fn missing_summary_falls_back_to_busy() {
        let event = display_event(&timed("2025-02-05T16:00:00-05:00"));

        assert_eq!(event.title, DEFAULT_TITLE);
        assert_eq!(event.time, "4:00 PM");
    }

    #[test]
    fn empty_summary_is_kept() {
        let event = display_event(&timed("2025-02-05T16:00:00-05:00").with_summary(""));

        assert_eq!(event.title, "");
    }

    #[test]
    fn raw_start_survives_utc_input() {
        // Zulu-suffixed starts must come back out exactly as sent
        let event = display_event(&timed("2025-06-01T14:00:00Z"));

        assert_eq!(event.raw_start, "2025-06-01T14:00:00Z");
        assert_eq!(event.time, "2:00 PM");
    }

    #[test]
    fn maps_every_event_in_order() {
        let raw = vec![
            all_day("2025-02-05").with_summary("Offsite"),
            timed("2025-02-05T09:30:00-05:00").with_summary("Standup"),
            timed("2025-02-05T16:00:00-05:00"),
        ];

        let events = display_events(&raw);

        assert_eq!(events.len(), raw.len());
        assert_eq!(events[0].title, "Offsite");
        assert_eq!(events[1].title, "Standup");
        assert_eq!(events[2].title, DEFAULT_TITLE);
    }
}
