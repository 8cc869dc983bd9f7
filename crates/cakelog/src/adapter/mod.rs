//! Backend adapters: map the [`Logger`](crate::Logger) contract onto a real
//! logging library
//!
//! Adapters are the end of a chain. They attach the auxiliary values of a
//! call as a single JSON array under one key and never report failures back
//! to the caller.

pub mod log_logger;
pub mod tracing_logger;

pub use self::log_logger::LogLogger;
pub use self::tracing_logger::TracingLogger;
