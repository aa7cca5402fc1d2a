//! Google Calendar API client.
//!
//! This module provides a low-level HTTP client for the Google Calendar API,
//! handling authentication, request building, and response parsing.

use std::time::Duration;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use dayboard_core::TimeWindow;

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::{RawEvent, RawEventTime};

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar API client.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http_client: reqwest::Client,
    access_token: String,
}

impl GoogleCalendarClient {
    /// Creates a new Google Calendar client with the given access token.
    pub fn new(access_token: impl Into<String>, timeout: Duration, user_agent: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            access_token: access_token.into(),
        }
    }

    /// Lists events from a calendar within the given window.
    ///
    /// Events are requested ordered by start time, with recurring events
    /// expanded into instances when `expand_recurring` is set. Pagination is
    /// followed until the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` mapped from the API response: 401 as
    /// authentication, 403 as authorization, 429 as rate limiting, other
    /// non-success statuses as server errors.
    pub async fn list_events(
        &self,
        calendar_id: &str,
        window: &TimeWindow,
        expand_recurring: bool,
    ) -> ProviderResult<Vec<RawEvent>> {
        let mut all_events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let result = self
                .list_events_page(calendar_id, window, expand_recurring, page_token.as_deref())
                .await?;

            for event in result.items {
                if let Some(raw_event) = convert_event(event) {
                    all_events.push(raw_event);
                }
            }

            match result.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(
            "fetched {} events from calendar {}",
            all_events.len(),
            calendar_id
        );
        Ok(all_events)
    }

    /// Fetches a single page of events.
    async fn list_events_page(
        &self,
        calendar_id: &str,
        window: &TimeWindow,
        expand_recurring: bool,
        page_token: Option<&str>,
    ) -> ProviderResult<EventListResponse> {
        let url = format!(
            "{}/calendars/{}/events",
            CALENDAR_API_BASE,
            urlencoding::encode(calendar_id)
        );

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", window.start.to_rfc3339()),
                ("timeMax", window.end.to_rfc3339()),
                ("singleEvents", expand_recurring.to_string()),
                ("orderBy", "startTime".to_string()),
            ]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token.to_string())]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::network("request timeout")
            } else if e.is_connect() {
                ProviderError::network(format!("connection failed: {}", e))
            } else {
                ProviderError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();

        // Handle rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(ProviderError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }

        // Handle authentication errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::authentication(
                "access token expired or invalid",
            ));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::authorization("access denied to calendar"));
        }

        // Handle other errors
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::server(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        // Parse response
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))?;

        let list_response: EventListResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse response: {}", e))
        })?;

        Ok(list_response)
    }
}

/// Converts a Google Calendar API event to a [`RawEvent`].
///
/// Cancelled events and events without a usable start are skipped.
fn convert_event(event: ApiEvent) -> Option<RawEvent> {
    if event.status.as_deref() == Some("cancelled") {
        debug!(
            "skipping cancelled event {}",
            event.id.as_deref().unwrap_or("<no id>")
        );
        return None;
    }

    let id = event.id?;

    let (start, raw_start) = match (event.start.date_time, event.start.date) {
        (Some(dt), _) => {
            let parsed = DateTime::parse_from_rfc3339(&dt)
                .map_err(|e| debug!("skipping event {}: bad start time: {}", id, e))
                .ok()?;
            (RawEventTime::DateTime(parsed), dt)
        }
        (None, Some(date)) => {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|e| debug!("skipping event {}: bad start date: {}", id, e))
                .ok()?;
            (RawEventTime::Date(parsed), date)
        }
        (None, None) => {
            debug!("skipping event {} with no start", id);
            return None;
        }
    };

    let mut raw_event = RawEvent::new(id, start, raw_start);
    raw_event.summary = event.summary;
    Some(raw_event)
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventListResponse {
    #[serde(default)]
    items: Vec<ApiEvent>,
    next_page_token: Option<String>,
}

/// A single event from the Google Calendar API.
///
/// Only the fields the display pipeline reads are deserialized.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    id: Option<String>,
    summary: Option<String>,
    start: ApiEventTime,
    status: Option<String>,
}

/// Event start time from the API: a bare date or an RFC 3339 date-time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date: Option<String>,
    date_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_event_list_response() {
        let json = r#"{
            "items": [
                {
                    "id": "event1",
                    "summary": "Test Meeting",
                    "start": {
                        "dateTime": "2024-03-15T10:00:00Z"
                    },
                    "end": {
                        "dateTime": "2024-03-15T11:00:00Z"
                    },
                    "status": "confirmed"
                }
            ],
            "nextPageToken": "page-2"
        }"#;

        let response: EventListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].summary, Some("Test Meeting".to_string()));
        assert_eq!(response.next_page_token, Some("page-2".to_string()));
    }

    #[test]
    fn parse_empty_list_response() {
        let response: EventListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn parse_all_day_event() {
        let json = r#"{
            "id": "event1",
            "summary": "All Day Event",
            "start": {
                "date": "2024-03-15"
            }
        }"#;

        let event: ApiEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.start.date, Some("2024-03-15".to_string()));
        assert!(event.start.date_time.is_none());
    }

    #[test]
    fn convert_timed_event_keeps_offset_and_raw_start() {
        let json = r#"{
            "id": "event1",
            "summary": "Standup",
            "start": {
                "dateTime": "2024-03-15T09:30:00-05:00"
            }
        }"#;

        let event: ApiEvent = serde_json::from_str(json).unwrap();
        let raw = convert_event(event).unwrap();

        assert_eq!(raw.raw_start, "2024-03-15T09:30:00-05:00");
        match raw.start {
            RawEventTime::DateTime(dt) => {
                assert_eq!(dt.offset().local_minus_utc(), -5 * 3600);
            }
            RawEventTime::Date(_) => panic!("expected a timed start"),
        }
    }

    #[test]
    fn convert_all_day_event() {
        let json = r#"{
            "id": "event1",
            "start": {
                "date": "2024-03-15"
            }
        }"#;

        let event: ApiEvent = serde_json::from_str(json).unwrap();
        let raw = convert_event(event).unwrap();

        assert!(raw.is_all_day());
        assert!(raw.summary.is_none());
        assert_eq!(raw.raw_start, "2024-03-15");
    }

    #[test]
    fn convert_skips_cancelled_event() {
        let json = r#"{
            "id": "event1",
            "status": "cancelled",
            "start": {
                "dateTime": "2024-03-15T10:00:00Z"
            }
        }"#;

        let event: ApiEvent = serde_json::from_str(json).unwrap();
        assert!(convert_event(event).is_none());
    }

    #[test]
    fn convert_skips_event_without_start() {
        let json = r#"{
            "id": "event1",
            "summary": "Broken",
            "start": {}
        }"#;

        let event: ApiEvent = serde_json::from_str(json).unwrap();
        assert!(convert_event(event).is_none());
    }

    #[test]
    fn convert_keeps_empty_summary() {
        let json = r#"{
            "id": "event1",
            "summary": "",
            "start": {
                "dateTime": "2024-03-15T10:00:00Z"
            }
        }"#;

        let event: ApiEvent = serde_json::from_str(json).unwrap();
        let raw = convert_event(event).unwrap();
        assert_eq!(raw.summary, Some(String::new()));
    }
}
