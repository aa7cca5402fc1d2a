//! Core types: time, display events, formatting

pub mod event;
pub mod format;
pub mod time;
pub mod tracing;

pub use event::{DisplayEvent, ScheduleResponse, EVENT_COLOR, NOT_AUTHENTICATED};
pub use format::{clock_label, effective_title, ALL_DAY_LABEL, DEFAULT_TITLE};
pub use time::{EventTime, TimeWindow};
pub use tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
