//! Decorators: loggers that wrap another [`Logger`](crate::Logger)
//!
//! Each decorator performs its side effect and forwards to the logger it
//! wraps, so they compose in any order.

pub mod context;
pub mod error_tracking;
pub mod metrics;

pub use self::context::{ContextEnricher, ContextLogger};
pub use self::error_tracking::{ErrorTrackingLogger, EventId, EventSink, LevelSinks};
pub use self::metrics::{LevelCounters, MetricsLogger};
