//! Provider-agnostic raw event data.
//!
//! [`RawEvent`] carries the fields of a provider event that the display
//! pipeline reads. Providers hand these over already filtered of cancelled
//! entries and entries without a usable start.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// The start of a raw event: a concrete instant or a bare calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEventTime {
    /// Timed event start, in the offset the provider sent.
    DateTime(DateTime<FixedOffset>),
    /// All-day event start.
    Date(NaiveDate),
}

impl RawEventTime {
    /// Returns true if this is a date-only value.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

/// A calendar event as supplied by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    /// Provider-assigned event identifier.
    pub id: String,

    /// The event title. None when the provider sent no summary at all.
    pub summary: Option<String>,

    /// The parsed start of the event.
    pub start: RawEventTime,

    /// The provider's textual start value, byte-for-byte as received.
    pub raw_start: String,
}

impl RawEvent {
    /// Creates a new raw event with the minimum required fields.
    pub fn new(id: impl Into<String>, start: RawEventTime, raw_start: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: None,
            start,
            raw_start: raw_start.into(),
        }
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Returns true if this is an all-day event.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day()
    }
}
