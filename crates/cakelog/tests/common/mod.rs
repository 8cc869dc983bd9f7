// Shared helpers for cakelog integration tests

#![allow(dead_code)]

use cakelog::decorator::{EventId, EventSink};
use cakelog::{Level, Logger, RequestContext, Value};
use std::error::Error;
use std::sync::Mutex;

/// A message-level call as seen by the wrapped logger
#[derive(Debug, Clone)]
pub struct MsgCall {
    pub ctx: RequestContext,
    pub msg: String,
    pub args: Vec<Value>,
}

/// An error-level call as seen by the wrapped logger
#[derive(Debug, Clone)]
pub struct ErrCall {
    pub ctx: RequestContext,
    pub err_message: String,
    /// Address of the error object, to check the same object was forwarded
    pub err_addr: usize,
    pub args: Vec<Value>,
}

/// Logger that records every call it receives
#[derive(Default)]
pub struct RecordingLogger {
    pub debug_in: Mutex<Vec<MsgCall>>,
    pub info_in: Mutex<Vec<MsgCall>>,
    pub warn_in: Mutex<Vec<MsgCall>>,
    pub error_in: Mutex<Vec<ErrCall>>,
}

impl RecordingLogger {
    pub fn debug_calls(&self) -> Vec<MsgCall> {
        self.debug_in.lock().unwrap().clone()
    }

    pub fn info_calls(&self) -> Vec<MsgCall> {
        self.info_in.lock().unwrap().clone()
    }

    pub fn warn_calls(&self) -> Vec<MsgCall> {
        self.warn_in.lock().unwrap().clone()
    }

    pub fn error_calls(&self) -> Vec<ErrCall> {
        self.error_in.lock().unwrap().clone()
    }

    fn push(calls: &Mutex<Vec<MsgCall>>, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        calls.lock().unwrap().push(MsgCall {
            ctx: ctx.clone(),
            msg: msg.to_string(),
            args,
        });
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        Self::push(&self.debug_in, ctx, msg, args);
    }

    fn info(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        Self::push(&self.info_in, ctx, msg, args);
    }

    fn warn(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        Self::push(&self.warn_in, ctx, msg, args);
    }

    fn error(&self, ctx: &RequestContext, err: &(dyn Error + 'static), args: Vec<Value>) {
        self.error_in.lock().unwrap().push(ErrCall {
            ctx: ctx.clone(),
            err_message: err.to_string(),
            err_addr: error_addr(err),
            args,
        });
    }
}

pub fn error_addr(err: &(dyn Error + 'static)) -> usize {
    err as *const dyn Error as *const () as usize
}

/// Event sink that hands out a fixed id and remembers what it captured
pub struct FixedSink {
    pub id: Option<EventId>,
    pub messages: Mutex<Vec<(Level, String)>>,
    pub errors: Mutex<Vec<String>>,
}

impl FixedSink {
    pub fn new(id: Option<EventId>) -> Self {
        Self {
            id,
            messages: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }
}

impl EventSink for FixedSink {
    fn capture_message(&self, level: Level, msg: &str) -> Option<EventId> {
        self.messages.lock().unwrap().push((level, msg.to_string()));
        self.id
    }

    fn capture_error(&self, err: &(dyn Error + 'static)) -> Option<EventId> {
        self.errors.lock().unwrap().push(err.to_string());
        self.id
    }
}
