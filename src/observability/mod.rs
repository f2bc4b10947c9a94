//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http::Request execution
//!     → tracing events (request_id, method, url, status, elapsed)
//!     → logging.rs subscriber (stdout)
//! ```

pub mod logging;
