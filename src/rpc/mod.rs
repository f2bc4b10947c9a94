//! RPC header context.
//!
//! # Data Flow
//! ```text
//! caller context
//!     → set_rpc_header / set_rpc_headers (derive new handle)
//!     → ... more derivations along the call chain ...
//!     → get_rpc_header / get_rpc_headers (walk the chain)
//! ```
//!
//! # Design Decisions
//! - Headers live in the context chain itself; there is no global registry
//! - Every write yields a new handle; earlier handles never observe it
//! - Lookups are O(depth), which is fine for header-sized chains

pub mod context;
pub mod header;

pub use context::{Context, ContextKey};
pub use header::{
    get_rpc_header, get_rpc_headers, header_key, set_rpc_header, set_rpc_headers, HEADER_SCOPE,
};
