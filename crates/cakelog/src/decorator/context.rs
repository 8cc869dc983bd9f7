//! Context enrichment
//!
//! [`ContextLogger`] lets callers attach key/value pairs to a
//! [`RequestContext`] as it travels through layers of an application. Every
//! log call made with that context carries a snapshot of the pairs as one
//! trailing auxiliary value.
//!
//! Pairs are stored as an immutable linked chain under a key private to the
//! logger instance. Deriving a context pushes one node; reading walks the
//! chain and copies it into a fresh [`Fields`] map, nearest node winning.

use crate::logger::{Fields, Logger, Value};
use cakelog_core_types::{ContextKey, RequestContext};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Adds key/value pairs to a context for inclusion in later log calls
pub trait ContextEnricher {
    /// Return a new context whose pairs are those of `ctx` with `key` set to
    /// `value`. `ctx` itself is unchanged.
    fn put_context(&self, ctx: &RequestContext, key: &str, value: Value) -> RequestContext;
}

struct FieldNode {
    key: String,
    value: Value,
    parent: Option<Arc<FieldNode>>,
}

impl Drop for FieldNode {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = Arc::into_inner(node).and_then(|mut node| node.parent.take());
        }
    }
}

/// Decorator that appends accumulated context pairs to every log call
pub struct ContextLogger {
    log: Arc<dyn Logger>,
    key: ContextKey,
}

impl ContextLogger {
    /// Wrap `log`; each instance gets its own namespace on the context
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self {
            log,
            key: ContextKey::unique(),
        }
    }

    /// Snapshot of every pair put on `ctx` through this logger
    ///
    /// The returned map is a copy: mutating it affects neither `ctx` nor
    /// later snapshots.
    pub fn fields(&self, ctx: &RequestContext) -> Fields {
        let mut fields = Fields::new();
        let mut node = ctx.value::<Arc<FieldNode>>(&self.key).map(Arc::as_ref);
        while let Some(current) = node {
            if !fields.contains_key(&current.key) {
                fields.insert(current.key.clone(), current.value.clone());
            }
            node = current.parent.as_deref();
        }
        fields
    }

    fn enrich_args(&self, ctx: &RequestContext, mut args: Vec<Value>) -> Vec<Value> {
        let fields = self.fields(ctx);
        if !fields.is_empty() {
            args.push(Value::Object(fields));
        }
        args
    }
}

impl ContextEnricher for ContextLogger {
    fn put_context(&self, ctx: &RequestContext, key: &str, value: Value) -> RequestContext {
        let parent = ctx.value::<Arc<FieldNode>>(&self.key).cloned();
        let node = Arc::new(FieldNode {
            key: key.to_string(),
            value,
            parent,
        });
        ctx.with_value(self.key, node)
    }
}

impl Logger for ContextLogger {
    fn debug(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.log.debug(ctx, msg, self.enrich_args(ctx, args));
    }

    fn info(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.log.info(ctx, msg, self.enrich_args(ctx, args));
    }

    fn warn(&self, ctx: &RequestContext, msg: &str, args: Vec<Value>) {
        self.log.warn(ctx, msg, self.enrich_args(ctx, args));
    }

    fn error(&self, ctx: &RequestContext, err: &(dyn Error + 'static), args: Vec<Value>) {
        self.log.error(ctx, err, self.enrich_args(ctx, args));
    }
}

impl fmt::Debug for ContextLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextLogger").field("key", &self.key).finish()
    }
}
