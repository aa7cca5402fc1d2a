//! CalendarProvider trait and the Google Calendar implementation.
//!
//! This crate provides the calendar side of the backend:
//!
//! - [`CalendarProvider`] - The trait the HTTP layer talks to
//! - [`TokenStore`] - Credential record persistence, keyed by account
//! - [`RawEvent`] - Provider-agnostic raw event data
//! - [`display_events`] - Pipeline from raw events to display shapes
//! - [`ProviderError`] - Error types for provider operations
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Google API     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      ┌─────────────────┐
//! │ GoogleProvider  │─────▶│   TokenStore    │
//! └────────┬────────┘      └─────────────────┘
//!          │
//!          │ CalendarProvider
//!          ▼
//!    ┌───────────┐
//!    │ RawEvent  │
//!    └─────┬─────┘
//!          │
//!          ▼ display_events()
//!   ┌──────────────┐
//!   │ DisplayEvent │
//!   └──────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dayboard_providers::{CalendarProvider, FetchOptions};
//!
//! async fn todays_events(provider: &dyn CalendarProvider) -> Vec<DisplayEvent> {
//!     provider.fetch_events(FetchOptions::new()).await?
//! }
//! ```

pub mod error;
pub mod google;
pub mod normalize;
pub mod provider;
pub mod raw_event;
pub mod store;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use normalize::{display_event, display_events};
pub use provider::{BoxFuture, CalendarProvider, ErrorProvider, FetchOptions, StaticProvider};
pub use raw_event::{RawEvent, RawEventTime};
pub use store::{FileTokenStore, TokenRecord, TokenStore};
