//! Error-tracker reporting
//!
//! [`ErrorTrackingLogger`] reports each call to the [`EventSink`] configured
//! for its level before forwarding it. When the sink hands back an event id,
//! the forwarded arguments gain a trailing `{event_id_key: "<id>"}` mapping so
//! the log line can be matched with the tracker's event.

use crate::logger::{Fields, Level, Logger, Value};
use cakelog_core_types::schema::DEFAULT_EVENT_ID_KEY;
use cakelog_core_types::RequestContext;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

/// Identifier an error tracker assigns to a captured event
pub type EventId = Uuid;

/// Client of an error-tracking service
///
/// Implementations must not block the caller for long and must not panic;
/// returning `None` means the event was dropped or sampled out.
pub trait EventSink: Send + Sync {
    fn capture_message(&self, level: Level, msg: &str) -> Option<EventId>;

    fn capture_error(&self, err: &(dyn Error + 'static)) -> Option<EventId>;
}

/// Sink per level; `None` leaves that level unreported
#[derive(Clone, Default)]
pub struct LevelSinks {
    pub debug: Option<Arc<dyn EventSink>>,
    pub info: Option<Arc<dyn EventSink>>,
    pub warn: Option<Arc<dyn EventSink>>,
    pub error: Option<Arc<dyn EventSink>>,
}

/// Decorator that reports log calls to an error tracker
pub struct ErrorTrackingLogger {
    log: Arc<dyn Logger>,
    sinks: LevelSinks,
    event_id_key: String,
}

impl ErrorTrackingLogger {
    pub fn new(log: Arc<dyn Logger>, sinks: LevelSinks) -> Self {
        Self {
            log,
            sinks,
            event_id_key: DEFAULT_EVENT_ID_KEY.to_string(),
        }
    }

    /// Use `key` instead of the default for the appended event id
    pub fn with_event_id_key(mut self, key: impl Into<String>) -> Self {
        self.event_id_key = key.into();
        self
    }

    pub fn event_id_key(&self) -> &str {
        &self.event_id_key
    }

    fn capture_message(
        &self,
        sink: Option<&Arc<dyn EventSink>>,
        level: Level,
        msg: &str,
        args: Vec<Value>,
    ) -> Vec<Value> {
        let event_id = sink.and_then(|sink| sink.capture_message(level, msg));
        self.append_event_id(event_id, args)
    }

    fn capture_error(&self, err: &(dyn Error + 'static), args: Vec<Value>) -> Vec<Value> {
        let event_id = self
            .sinks
            .error
            .as_ref()
            .and_then(|sink| sink.capture_error(err));
        self.append_event_id(event_id, args)
    }

    fn append_event_id(&self, event_id: Option<EventId>, mut args: Vec<Value>) -> Vec<Value> {
        if let Some(event_id) = event_id {
            let mut fields = Fields::new();
            fields.insert(self.event_id_key.clone(), Value::String(event_id.to_string()));
            args.push(Value::Object(fields));
        }
        args
    }
}

impl Logger for ErrorTrackingLogger {
    fn debug(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        let args = self.capture_message(self.sinks.debug.as_ref(), Level::Debug, msg, args);
        self.log.debug(ctx, msg, args);
    }

    fn info(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        let args = self.capture_message(self.sinks.info.as_ref(), Level::Info, msg, args);
        self.log.info(ctx, msg, args);
    }

    fn warn(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        let args = self.capture_message(self.sinks.warn.as_ref(), Level::Warn, msg, args);
        self.log.warn(ctx, msg, args);
    }

    fn error(&self, ctx: &RequestContext, err: &(dyn Error + 'static), args: Vec<Value>) {
        let args = self.capture_error(err, args);
        self.log.error(ctx, err, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NopLogger;

    struct DroppingSink;

    impl EventSink for DroppingSink {
        fn capture_message(&self, _level: Level, _msg: &str) -> Option<EventId> {
            None
        }

        fn capture_error(&self, _err: &(dyn Error + 'static)) -> Option<EventId> {
            None
        }
    }

    #[test]
    fn test_default_event_id_key() {
        let logger = ErrorTrackingLogger::new(Arc::new(NopLogger), LevelSinks::default());
        assert_eq!(logger.event_id_key(), DEFAULT_EVENT_ID_KEY);

        let logger = logger.with_event_id_key("trackerId");
        assert_eq!(logger.event_id_key(), "trackerId");
    }

    #[test]
    fn test_dropped_event_leaves_args_unchanged() {
        let logger = ErrorTrackingLogger::new(Arc::new(NopLogger), LevelSinks::default());
        let sink: Arc<dyn EventSink> = Arc::new(DroppingSink);

        let args = logger.capture_message(Some(&sink), Level::Info, "m", vec![Value::from(1)]);

        assert_eq!(args, vec![Value::from(1)]);
    }

    #[test]
    fn test_event_id_is_appended_as_mapping() {
        let logger = ErrorTrackingLogger::new(Arc::new(NopLogger), LevelSinks::default());
        let id = Uuid::now_v7();

        let args = logger.append_event_id(Some(id), Vec::new());

        assert_eq!(args.len(), 1);
        assert_eq!(args[0][DEFAULT_EVENT_ID_KEY], Value::String(id.to_string()));
    }
}
