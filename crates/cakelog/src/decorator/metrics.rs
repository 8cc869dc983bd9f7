//! Per-level message counters
//!
//! [`MetricsLogger`] forwards every call unchanged and then increments the
//! counter configured for its level. Counters are plain `metrics` handles:
//! where they are exported (Prometheus or otherwise) is up to the recorder
//! the application installs.

use crate::logger::{Level, Logger, Value};
use cakelog_core_types::schema::LABEL_LEVEL;
use cakelog_core_types::RequestContext;
use ::metrics::Counter;
use std::error::Error;
use std::sync::Arc;

/// Counter incremented per level; `None` leaves that level uncounted
#[derive(Clone, Default)]
pub struct LevelCounters {
    pub debug: Option<Counter>,
    pub info: Option<Counter>,
    pub warn: Option<Counter>,
    pub error: Option<Counter>,
}

impl LevelCounters {
    /// Register one counter per level under `name`, labeled `level=<level>`
    ///
    /// Handles are resolved against the global recorder at the time of the
    /// call, so install the recorder first.
    pub fn registered(name: &'static str) -> Self {
        let counter = |level: Level| ::metrics::counter!(name, LABEL_LEVEL => level.as_str());
        Self {
            debug: Some(counter(Level::Debug)),
            info: Some(counter(Level::Info)),
            warn: Some(counter(Level::Warn)),
            error: Some(counter(Level::Error)),
        }
    }

    fn get(&self, level: Level) -> Option<&Counter> {
        match level {
            Level::Debug => self.debug.as_ref(),
            Level::Info => self.info.as_ref(),
            Level::Warn => self.warn.as_ref(),
            Level::Error => self.error.as_ref(),
        }
    }
}

/// Decorator that counts log calls per level
pub struct MetricsLogger {
    log: Arc<dyn Logger>,
    counters: LevelCounters,
}

impl MetricsLogger {
    pub fn new(log: Arc<dyn Logger>, counters: LevelCounters) -> Self {
        Self { log, counters }
    }

    fn count(&self, level: Level) {
        if let Some(counter) = self.counters.get(level) {
            counter.increment(1);
        }
    }
}

impl Logger for MetricsLogger {
    fn debug(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.log.debug(ctx, msg, args);
        self.count(Level::Debug);
    }

    fn info(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.log.info(ctx, msg, args);
        self.count(Level::Info);
    }

    fn warn(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.log.warn(ctx, msg, args);
        self.count(Level::Warn);
    }

    fn error(&self, ctx: &RequestContext, err: &(dyn Error + 'static), args: Vec<Value>) {
        self.log.error(ctx, err, args);
        self.count(Level::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NopLogger;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_counts_only_configured_level() {
        let info = Arc::new(AtomicU64::new(0));
        let counters = LevelCounters {
            info: Some(Counter::from_arc(info.clone())),
            ..LevelCounters::default()
        };
        let logger = MetricsLogger::new(Arc::new(NopLogger), counters);
        let ctx = RequestContext::new();

        logger.info(&ctx, "one", Vec::new());
        logger.info(&ctx, "two", Vec::new());
        logger.debug(&ctx, "uncounted", Vec::new());

        assert_eq!(info.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_registered_without_recorder_is_harmless() {
        let logger = MetricsLogger::new(Arc::new(NopLogger), LevelCounters::registered("test"));
        logger.warn(&RequestContext::new(), "no recorder installed", Vec::new());
    }
}
