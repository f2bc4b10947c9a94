//! Configuration schema definitions.
//!
//! This module defines the configuration structure for outbound clients.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default total request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Root configuration for building HTTP clients.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// TLS verification settings.
    pub tls: TlsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// User-Agent sent with every request.
    pub user_agent: Option<String>,

    /// Headers sent with every request, before per-call headers.
    pub default_headers: HashMap<String, String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time for request and response in seconds.
    pub request_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_secs: Option<u64>,
}

impl TimeoutConfig {
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(&self) -> Option<Duration> {
        self.connect_secs.map(Duration::from_secs)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_TIMEOUT_SECS,
            connect_secs: None,
        }
    }
}

/// TLS configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TlsConfig {
    /// Skip certificate and hostname verification.
    /// Only meant for self-signed endpoints and test environments.
    pub accept_invalid_certs: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record elapsed time for every request.
    pub trace_requests: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            trace_requests: false,
        }
    }
}
