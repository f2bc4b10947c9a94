//! RPC header accessors on top of [`Context`].

use std::collections::HashMap;

use crate::rpc::context::{Context, ContextKey};

/// Scope used for every header attachment.
pub const HEADER_SCOPE: &str = "rpc-header";

/// The context key a header named `name` is stored under.
pub fn header_key(name: impl Into<String>) -> ContextKey {
    ContextKey::new(HEADER_SCOPE, name)
}

/// Get a single header from the context.
///
/// Returns `None` for the background context, for a missing key, and when
/// the value stored under the key is not a `String`.
pub fn get_rpc_header(ctx: &Context, key: &str) -> Option<String> {
    ctx.value(&header_key(key))?
        .downcast_ref::<String>()
        .cloned()
}

/// Attach a header, returning the derived context.
pub fn set_rpc_header(ctx: &Context, key: impl Into<String>, value: impl Into<String>) -> Context {
    ctx.with_value(header_key(key), value.into())
}

/// Collect every header reachable from the context.
///
/// The newest attachment of each key decides its value. A key whose newest
/// attachment is not a string is left out.
pub fn get_rpc_headers(ctx: &Context) -> HashMap<String, String> {
    let mut seen = HashMap::new();
    for (key, value) in ctx.entries() {
        if key.scope() != HEADER_SCOPE || seen.contains_key(key.name()) {
            continue;
        }
        seen.insert(
            key.name().to_string(),
            value.downcast_ref::<String>().cloned(),
        );
    }

    seen.into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
}

/// Attach several headers at once.
///
/// Application order follows the iterator and must not be relied on when
/// it comes from a `HashMap`.
pub fn set_rpc_headers<I, K, V>(ctx: &Context, headers: I) -> Context
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    headers
        .into_iter()
        .fold(ctx.clone(), |acc, (k, v)| set_rpc_header(&acc, k, v))
}
