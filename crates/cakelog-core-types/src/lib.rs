//! Core types shared across cakelog loggers and decorators
//!
//! This crate provides the foundational types that every logger in a
//! decorator chain agrees on:
//!
//! - **Correlation types**: RequestId, TraceId and the request-scoped
//!   RequestContext handle that carries them
//! - **Context keys**: ContextKey, the private token used to namespace values
//!   stored on a RequestContext
//! - **Schema constants**: Canonical field keys, metric names and labels

pub mod correlation;
pub mod schema;

pub use correlation::{ContextKey, RequestContext, RequestId, TraceId};
