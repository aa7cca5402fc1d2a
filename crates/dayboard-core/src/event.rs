//! Display-oriented event types for the schedule API.
//!
//! This module provides the output shapes consumed by the dashboard:
//! - [`DisplayEvent`]: one calendar event shaped for UI rendering
//! - [`ScheduleResponse`]: the envelope returned by the schedule endpoint

use serde::{Deserialize, Serialize};

use crate::format;
use crate::time::EventTime;

/// Display color tag applied to every schedule entry.
///
/// The dashboard theme resolves the CSS variable; the value is never
/// derived from event data.
pub const EVENT_COLOR: &str = "var(--neon-magenta)";

/// Sentinel message returned when no credential record is stored.
pub const NOT_AUTHENTICATED: &str = "NOT_AUTHENTICATED";

/// A calendar event shaped for dashboard rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEvent {
    /// Event title, `"Busy"` when the provider sent none.
    pub title: String,
    /// Rendered clock label: `"All Day"` or a 12-hour time.
    pub time: String,
    /// Whether the start was expressed as a bare date.
    pub all_day: bool,
    /// The provider's start value, passed through unmodified.
    pub raw_start: String,
    /// Fixed display color tag, identical for every event.
    pub color: String,
}

impl DisplayEvent {
    /// Builds a display event from an optional title, a start time, and
    /// the provider's raw start value.
    pub fn new(title: Option<&str>, start: &EventTime, raw_start: impl Into<String>) -> Self {
        Self {
            title: format::effective_title(title).to_string(),
            time: format::clock_label(start),
            all_day: start.is_all_day(),
            raw_start: raw_start.into(),
            color: EVENT_COLOR.to_string(),
        }
    }
}

/// The response envelope for the schedule endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The day's events, in provider order.
    pub events: Vec<DisplayEvent>,
    /// Set to [`NOT_AUTHENTICATED`] when no credential record exists;
    /// omitted from serialization otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ScheduleResponse {
    /// Wraps a fetched event list.
    pub fn with_events(events: Vec<DisplayEvent>) -> Self {
        Self {
            events,
            message: None,
        }
    }

    /// The empty response served before an account is linked.
    pub fn not_authenticated() -> Self {
        Self {
            events: Vec::new(),
            message: Some(NOT_AUTHENTICATED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timed_start(rfc3339: &str) -> EventTime {
        EventTime::from_offset(chrono::DateTime::parse_from_rfc3339(rfc3339).unwrap())
    }

    #[test]
    fn timed_event_fields() {
        let event = DisplayEvent::new(
            Some("Standup"),
            &timed_start("2025-02-05T09:30:00-05:00"),
            "2025-02-05T09:30:00-05:00",
        );
        assert_eq!(event.title, "Standup");
        assert_eq!(event.time, "9:30 AM");
        assert!(!event.all_day);
        assert_eq!(event.raw_start, "2025-02-05T09:30:00-05:00");
        assert_eq!(event.color, EVENT_COLOR);
    }

    #[test]
    fn all_day_event_fields() {
        let start = EventTime::from_date(NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
        let event = DisplayEvent::new(Some("Conference"), &start, "2025-02-05");
        assert_eq!(event.time, "All Day");
        assert!(event.all_day);
        assert_eq!(event.raw_start, "2025-02-05");
    }

    #[test]
    fn missing_title_defaults_to_busy() {
        let event = DisplayEvent::new(
            None,
            &timed_start("2025-02-05T16:00:00+00:00"),
            "2025-02-05T16:00:00Z",
        );
        assert_eq!(event.title, "Busy");
    }

    #[test]
    fn sentinel_response_shape() {
        let response = ScheduleResponse::not_authenticated();
        assert!(response.events.is_empty());
        assert_eq!(response.message.as_deref(), Some(NOT_AUTHENTICATED));
    }

    #[test]
    fn message_omitted_when_events_present() {
        let event = DisplayEvent::new(
            Some("Standup"),
            &timed_start("2025-02-05T09:30:00-05:00"),
            "2025-02-05T09:30:00-05:00",
        );
        let json = serde_json::to_value(ScheduleResponse::with_events(vec![event])).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["events"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn serde_roundtrip() {
        let response = ScheduleResponse::not_authenticated();
        let json = serde_json::to_string(&response).unwrap();
        let parsed: ScheduleResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, parsed);
    }
}
