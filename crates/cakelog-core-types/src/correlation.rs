//! Correlation types and the request-scoped handle
//!
//! A `RequestContext` is created once per request or operation and threaded
//! through every log call. It is immutable: deriving a handle with an extra
//! value returns a new `RequestContext` and leaves the original untouched, so
//! handles can be cloned into other threads and extended independently.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for a single request or operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (e.g. an inbound `x-request-id` header)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trace identifier for distributed tracing across service boundaries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a new random TraceId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static NEXT_CONTEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Opaque token under which a component stores values on a `RequestContext`
///
/// Keys are only obtainable through [`ContextKey::unique`], so a component
/// that keeps its key private owns a namespace nobody else can read or
/// overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextKey(u64);

impl ContextKey {
    /// Allocate a key distinct from every other key in this process
    pub fn unique() -> Self {
        Self(NEXT_CONTEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

struct ValueNode {
    key: ContextKey,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<ValueNode>>,
}

impl Drop for ValueNode {
    // Unlink the chain iteratively; the default glue recurses once per node.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = Arc::into_inner(node).and_then(|mut node| node.parent.take());
        }
    }
}

/// Request-scoped handle carried through operation boundaries
///
/// Besides the correlation ids, a context holds a chain of values keyed by
/// [`ContextKey`]. The chain is shared between a handle and everything
/// derived from it and is never mutated after creation.
#[derive(Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
    values: Option<Arc<ValueNode>>,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new() -> Self {
        Self::with_request_id(RequestId::new())
    }

    /// Create a context with an existing RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            trace_id: None,
            values: None,
        }
    }

    /// Add a TraceId to the context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Derive a new context that carries `value` under `key`
    ///
    /// An earlier value stored under the same key is shadowed in the derived
    /// context only; `self` keeps seeing it.
    pub fn with_value<T>(&self, key: ContextKey, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            request_id: self.request_id.clone(),
            trace_id: self.trace_id.clone(),
            values: Some(Arc::new(ValueNode {
                key,
                value: Arc::new(value),
                parent: self.values.clone(),
            })),
        }
    }

    /// Look up the nearest value stored under `key`
    ///
    /// Returns `None` if nothing was stored under `key` or the stored value is
    /// not a `T`.
    pub fn value<T>(&self, key: &ContextKey) -> Option<&T>
    where
        T: Any + Send + Sync,
    {
        let mut node = self.values.as_deref();
        while let Some(current) = node {
            if current.key == *key {
                return current.value.downcast_ref::<T>();
            }
            node = current.parent.as_deref();
        }
        None
    }

    fn value_count(&self) -> usize {
        let mut count = 0;
        let mut node = self.values.as_deref();
        while let Some(current) = node {
            count += 1;
            node = current.parent.as_deref();
        }
        count
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("request_id", &self.request_id)
            .field("trace_id", &self.trace_id)
            .field("values", &self.value_count())
            .finish()
    }
}
