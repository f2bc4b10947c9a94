//! Immutable, chainable request context.
//!
//! # Responsibilities
//! - Carry request-scoped values through a chain of handles
//! - Extend a handle without touching it or any earlier handle
//! - Look values up newest-first along the chain
//!
//! # Design Decisions
//! - The chain is a persistent linked list of `Arc` nodes; each node owns
//!   its parent, so a handle keeps exactly its ancestors alive
//! - Nodes are never mutated after construction, so handles are shared
//!   across threads without locking
//! - Superseded nodes are freed once the last handle pointing at them drops

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Key under which a value is attached to a [`Context`].
///
/// The scope separates unrelated users of the same context, so two
/// components can both use the name `"user"` without colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextKey {
    scope: &'static str,
    name: String,
}

impl ContextKey {
    /// Create a new key in the given scope.
    pub fn new(scope: &'static str, name: impl Into<String>) -> Self {
        Self {
            scope,
            name: name.into(),
        }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

struct Node {
    key: ContextKey,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Node>>,
}

/// An opaque context handle.
///
/// Cloning is cheap and shares the underlying chain.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

impl Context {
    /// The empty context. Carries no values.
    pub fn background() -> Self {
        Self { head: None }
    }

    /// Returns a new context that extends `self` with one value.
    pub fn with_value<V>(&self, key: ContextKey, value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Node {
                key,
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up the most recent value attached under `key`.
    pub fn value(&self, key: &ContextKey) -> Option<&(dyn Any + Send + Sync)> {
        self.entries().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Whether this is the empty context.
    pub fn is_background(&self) -> bool {
        self.head.is_none()
    }

    /// Number of attachments in the chain, shadowed ones included.
    pub fn depth(&self) -> usize {
        self.entries().count()
    }

    /// Iterate over every attachment, newest first.
    pub(crate) fn entries(&self) -> Entries<'_> {
        Entries {
            next: self.head.as_deref(),
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries().map(|(k, _)| k))
            .finish()
    }
}

pub(crate) struct Entries<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a ContextKey, &'a (dyn Any + Send + Sync));

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some((&node.key, node.value.as_ref()))
    }
}

// Iterative drop so long chains don't recurse through `Arc<Node>` drops.
impl Drop for Node {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Arc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}
