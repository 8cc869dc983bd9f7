// Integration tests for the tracing and log backend adapters

use cakelog::adapter::log_logger::DEFAULT_TARGET;
use cakelog::adapter::{LogLogger, TracingLogger};
use cakelog::decorator::{ContextEnricher, ContextLogger};
use cakelog::logging_facility::TestCapture;
use cakelog::{args, Logger, RequestContext, RequestId, TraceId};
use log::kv::Key;
use log::{LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};

#[test]
fn test_tracing_logger_emits_event_per_level() {
    // Given: A tracing adapter and a known request id
    let logger = TracingLogger::new();
    let ctx = RequestContext::with_request_id(RequestId::from_string("req-1".to_string()));

    // When: We log at every level
    let events = TestCapture::capture(|| {
        logger.debug(&ctx, "debug message", args!["debug", 42]);
        logger.info(&ctx, "info message", args![]);
        logger.warn(&ctx, "warn message", args![]);
        logger.error(&ctx, &io::Error::other("error message"), args!["error"]);
    });

    // Then: One event per call with the matching level and message
    let levels: Vec<tracing::Level> = events.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![
            tracing::Level::DEBUG,
            tracing::Level::INFO,
            tracing::Level::WARN,
            tracing::Level::ERROR,
        ]
    );
    assert_eq!(events[0].message.as_deref(), Some("debug message"));
    assert_eq!(events[3].message.as_deref(), Some("error message"));

    // And: Correlation and args are attached as fields
    assert!(events.iter().all(|e| e.request_id.as_deref() == Some("req-1")));
    assert_eq!(events[0].context.as_deref(), Some(r#"["debug",42]"#));
    assert_eq!(events[1].context.as_deref(), Some("[]"));
    assert!(events[0].trace_id.is_none());
}

#[test]
fn test_tracing_logger_records_trace_id() {
    let trace_id = TraceId::from_string("trace-9".to_string());
    let ctx = RequestContext::new().with_trace_id(trace_id);

    let events = TestCapture::capture(|| TracingLogger::new().info(&ctx, "m", args![]));

    assert_eq!(events[0].trace_id.as_deref(), Some("trace-9"));
}

#[test]
fn test_context_logger_over_tracing_logger() {
    let logger = ContextLogger::new(Arc::new(TracingLogger::new()));
    let ctx = logger.put_context(&RequestContext::new(), "userID", json!(123));

    let events = TestCapture::capture(|| logger.info(&ctx, "signed in", args!["method", "otp"]));

    assert_eq!(
        events[0].context.as_deref(),
        Some(r#"["method","otp",{"userID":123}]"#)
    );
}

#[derive(Debug, Clone, PartialEq)]
struct CapturedRecord {
    level: log::Level,
    target: String,
    message: String,
    context: Option<String>,
    args: Option<String>,
    request_id: Option<String>,
    trace_id: Option<String>,
}

#[derive(Default)]
struct CaptureLog {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CaptureLog {
    fn leak() -> &'static CaptureLog {
        log::set_max_level(LevelFilter::Trace);
        Box::leak(Box::new(CaptureLog::default()))
    }

    fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for CaptureLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let kv = |key: &str| {
            record
                .key_values()
                .get(Key::from_str(key))
                .map(|v| v.to_string())
        };
        let captured = CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            context: kv("context"),
            args: kv("args"),
            request_id: kv("request_id"),
            trace_id: kv("trace_id"),
        };
        self.records.lock().unwrap().push(captured);
    }

    fn flush(&self) {}
}

#[test]
fn test_log_logger_emits_record_per_level() {
    // Given: A log adapter writing into a capturing sink
    let sink = CaptureLog::leak();
    let logger = LogLogger::with_sink(sink);
    let ctx = RequestContext::with_request_id(RequestId::from_string("req-2".to_string()));

    // When: We log at every level
    logger.debug(&ctx, "debug message", args!["debug", 42]);
    logger.info(&ctx, "info message", args![]);
    logger.warn(&ctx, "warn message", args![]);
    logger.error(&ctx, &io::Error::other("error message"), args!["error", 90]);

    // Then: Levels, messages and key/values line up
    let records = sink.records();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records.iter().map(|r| r.level).collect::<Vec<_>>(),
        vec![
            log::Level::Debug,
            log::Level::Info,
            log::Level::Warn,
            log::Level::Error,
        ]
    );
    assert_eq!(records[0].message, "debug message");
    assert_eq!(records[0].context.as_deref(), Some(r#"["debug",42]"#));
    assert_eq!(records[3].message, "error message");
    assert_eq!(records[3].context.as_deref(), Some(r#"["error",90]"#));
    assert!(records.iter().all(|r| r.target == DEFAULT_TARGET));
    assert!(records.iter().all(|r| r.request_id.as_deref() == Some("req-2")));
    assert!(records.iter().all(|r| r.trace_id.is_none()));
}

#[test]
fn test_log_logger_custom_target_and_args_key() {
    let sink = CaptureLog::leak();
    let logger = LogLogger::with_sink(sink)
        .with_target("billing")
        .with_args_key("args");
    let ctx = RequestContext::new().with_trace_id(TraceId::from_string("trace-3".to_string()));

    logger.info(&ctx, "charged", args![100]);

    let records = sink.records();
    assert_eq!(records[0].target, "billing");
    assert_eq!(records[0].args.as_deref(), Some("[100]"));
    assert!(records[0].context.is_none());
    assert_eq!(records[0].trace_id.as_deref(), Some("trace-3"));
}
