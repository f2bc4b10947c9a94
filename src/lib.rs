//! Outbound HTTP helpers and an RPC header context.
//!
//! - [`http`]: one-call GET/POST helpers with timeouts, custom headers,
//!   JSON/form/multipart bodies and an option to skip TLS verification
//! - [`rpc`]: an immutable context chain that carries named string headers
//!   from caller to callee

pub mod config;
pub mod http;
pub mod observability;
pub mod rpc;

pub use config::ClientConfig;
pub use http::{HttpError, HttpResult, Request, Response};
pub use rpc::Context;
