//! `log` facade backend
//!
//! Records carry the message as their arguments and the auxiliary values as a
//! structured key/value (JSON array text) under a configurable key, next to
//! the request and trace ids. Records above `log::max_level()` are dropped
//! before they reach the sink, as with the `log` macros.

use crate::logger::{Logger, Value};
use cakelog_core_types::schema::{FIELD_CONTEXT, FIELD_REQUEST_ID, FIELD_TRACE_ID};
use cakelog_core_types::RequestContext;
use log::{Log, Record};
use std::error::Error;
use std::fmt;

/// Default target of emitted records
pub const DEFAULT_TARGET: &str = "cakelog";

/// Adapter that logs through a `log::Log` implementation
pub struct LogLogger {
    sink: &'static dyn Log,
    target: String,
    args_key: String,
}

impl LogLogger {
    /// Log through the globally installed `log` logger
    pub fn new() -> Self {
        Self::with_sink(log::logger())
    }

    /// Log through `sink` instead of the global logger
    pub fn with_sink(sink: &'static dyn Log) -> Self {
        Self {
            sink,
            target: DEFAULT_TARGET.to_string(),
            args_key: FIELD_CONTEXT.to_string(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Key under which the auxiliary values are attached
    pub fn with_args_key(mut self, args_key: impl Into<String>) -> Self {
        self.args_key = args_key.into();
        self
    }

    fn emit(&self, ctx: &RequestContext, level: log::Level, msg: &str, args: Vec<Value>) {
        if level > log::max_level() {
            return;
        }
        let context = Value::Array(args).to_string();
        let mut kvs = vec![
            (FIELD_REQUEST_ID, ctx.request_id.as_str()),
            (self.args_key.as_str(), context.as_str()),
        ];
        if let Some(trace_id) = &ctx.trace_id {
            kvs.push((FIELD_TRACE_ID, trace_id.as_str()));
        }
        let kvs = kvs.as_slice();

        self.sink.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target(&self.target)
                .module_path_static(Some(module_path!()))
                .key_values(&kvs)
                .build(),
        );
    }
}

impl Default for LogLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogLogger")
            .field("target", &self.target)
            .field("args_key", &self.args_key)
            .finish()
    }
}

impl Logger for LogLogger {
    fn debug(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.emit(ctx, log::Level::Debug, msg, args);
    }

    fn info(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.emit(ctx, log::Level::Info, msg, args);
    }

    fn warn(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.emit(ctx, log::Level::Warn, msg, args);
    }

    fn error(&self, ctx: &RequestContext, err: &(dyn Error + 'static), args: Vec<Value>) {
        self.emit(ctx, log::Level::Error, &err.to_string(), args);
    }
}
