//! Outbound HTTP request facade.
//!
//! # Data Flow
//! ```text
//! caller
//!     → facade.rs (one-call helpers) or request.rs (builder)
//!     → reqwest client (timeout, optional TLS skip)
//!     → response.rs (buffered status, headers, body)
//!     → caller (raw bytes, decoded entity, or headers)
//! ```
//!
//! # Design Decisions
//! - Stateless: every call builds and drops its own client
//! - No retries or backoff; every error is terminal for that call
//! - Transport errors pass through unchanged

pub mod body;
pub mod error;
pub mod facade;
pub mod request;
pub mod response;

pub use body::{Body, FilePart};
pub use error::{HttpError, HttpResult};
pub use facade::*;
pub use request::Request;
pub use response::Response;
