//! `tracing` backend
//!
//! Emits one event per call at the matching level, with the request id, the
//! trace id when present, and the auxiliary values under `context`.

use crate::logger::{Logger, Value};
use cakelog_core_types::{RequestContext, TraceId};
use std::error::Error;

/// Adapter that logs through the current `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

fn trace_id(ctx: &RequestContext) -> Option<&str> {
    ctx.trace_id.as_ref().map(TraceId::as_str)
}

impl Logger for TracingLogger {
    fn debug(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        let context = Value::Array(args);
        tracing::debug!(
            request_id = %ctx.request_id,
            trace_id = trace_id(ctx),
            context = %context,
            "{}",
            msg
        );
    }

    fn info(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        let context = Value::Array(args);
        tracing::info!(
            request_id = %ctx.request_id,
            trace_id = trace_id(ctx),
            context = %context,
            "{}",
            msg
        );
    }

    fn warn(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        let context = Value::Array(args);
        tracing::warn!(
            request_id = %ctx.request_id,
            trace_id = trace_id(ctx),
            context = %context,
            "{}",
            msg
        );
    }

    fn error(&self, ctx: &RequestContext, err: &(dyn Error + 'static), args: Vec<Value>) {
        let context = Value::Array(args);
        tracing::error!(
            request_id = %ctx.request_id,
            trace_id = trace_id(ctx),
            context = %context,
            "{}",
            err
        );
    }
}
