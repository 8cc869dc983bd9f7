//! cakelog - one logging interface, any backend
//!
//! Application code logs through the four-operation [`Logger`] contract and a
//! request-scoped [`RequestContext`]. What happens to a call is decided by the
//! chain of loggers it is handed to:
//! - [`decorator::ContextLogger`] appends key/value pairs accumulated on the
//!   context with [`decorator::ContextEnricher::put_context`]
//! - [`decorator::MetricsLogger`] counts calls per level through `metrics`
//! - [`decorator::ErrorTrackingLogger`] reports calls to an error tracker
//! - [`adapter::TracingLogger`] and [`adapter::LogLogger`] hand the call to a
//!   real backend
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cakelog::adapter::TracingLogger;
//! use cakelog::decorator::{ContextEnricher, ContextLogger};
//! use cakelog::{args, Logger, RequestContext};
//!
//! let logger = ContextLogger::new(Arc::new(TracingLogger::new()));
//!
//! let ctx = RequestContext::new();
//! let ctx = logger.put_context(&ctx, "userID", 123.into());
//!
//! logger.info(&ctx, "user signed in", args!["method", "password"]);
//! ```

pub mod adapter;
pub mod decorator;
pub mod errors;
pub mod logger;
pub mod logging_facility;
mod macros;

pub use cakelog_core_types::{ContextKey, RequestContext, RequestId, TraceId};
pub use errors::{CakelogError, Result};
pub use logger::{Fields, Level, Logger, NopLogger, Value};
