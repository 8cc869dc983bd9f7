//! Canonical schema constants for structured logging and metrics
//!
//! Adapters and decorators use these so that every backend sees the same keys.

// Correlation fields recorded by backend adapters
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

/// Default key under which adapters attach the auxiliary values of a log call
pub const FIELD_CONTEXT: &str = "context";

/// Default key of the mapping the error-tracking decorator appends
pub const DEFAULT_EVENT_ID_KEY: &str = "eventId";

// Metrics
pub const METRIC_LOG_MESSAGES: &str = "cakelog_log_messages_total";
pub const LABEL_LEVEL: &str = "level";
