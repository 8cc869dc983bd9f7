//! The Logger contract
//!
//! Every backend adapter and decorator implements [`Logger`], so any of them
//! can wrap any other to form a chain.

use cakelog_core_types::RequestContext;
use std::error::Error;
use std::fmt;

/// An auxiliary value passed alongside a log message
pub type Value = serde_json::Value;

/// A key/value snapshot, as appended by the context decorator
pub type Fields = serde_json::Map<String, Value>;

/// Severity of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Lowercase name, used as a metric label
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured logging interface
///
/// Calls are fire-and-forget: implementations must not block indefinitely
/// and must swallow delivery failures instead of reporting them to the
/// caller. Implementations are shared between threads.
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>);

    /// Log an informational message
    fn info(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>);

    /// Log a warning
    fn warn(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>);

    /// Log an error; backends render its `Display` text as the message
    fn error(&self, ctx: &RequestContext, err: &(dyn Error + 'static), args: Vec<Value>);
}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl NopLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NopLogger {
    fn debug(&self, _ctx: &RequestContext, _msg: &str, _args: Vec<Value>) {}

    fn info(&self, _ctx: &RequestContext, _msg: &str, _args: Vec<Value>) {}

    fn warn(&self, _ctx: &RequestContext, _msg: &str, _args: Vec<Value>) {}

    fn error(&self, _ctx: &RequestContext, _err: &(dyn Error + 'static), _args: Vec<Value>) {}
}
