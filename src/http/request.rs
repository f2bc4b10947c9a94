//! Request construction and execution.
//!
//! # Responsibilities
//! - Build a client with a bounded timeout, optionally skipping TLS checks
//! - Collect caller headers and the body
//! - Execute GET/POST and buffer the response
//! - Tag every request with a unique ID for tracing
//!
//! # Design Decisions
//! - One client per request; nothing is shared between calls
//! - Header problems surface when the request is sent, so builder calls chain
//! - Headers apply in call order, later ones replace earlier ones of the same name

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method};
use url::Url;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::http::body::Body;
use crate::http::error::{HttpError, HttpResult};
use crate::http::response::Response;

/// A single outbound request.
pub struct Request {
    client: Client,
    headers: Vec<(String, String)>,
    body: Body,
    trace: bool,
}

impl Request {
    /// Create a request on a client with the given total timeout.
    /// A zero timeout means no timeout.
    pub fn new(timeout: Duration) -> HttpResult<Self> {
        let client = client_builder(timeout).build()?;
        Ok(Self::with_client(client))
    }

    /// Create a request that skips TLS certificate verification.
    ///
    /// Tracing is enabled, so the response carries its elapsed time.
    /// Only use this against self-signed endpoints or in test environments.
    pub fn insecure(timeout: Duration) -> HttpResult<Self> {
        let client = client_builder(timeout)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self::with_client(client).trace(true))
    }

    /// Create a request from a client configuration.
    pub fn from_config(config: &ClientConfig) -> HttpResult<Self> {
        let mut builder = client_builder(config.timeouts.request())
            .danger_accept_invalid_certs(config.tls.accept_invalid_certs)
            .default_headers(to_header_map(&config.default_headers)?);

        if let Some(connect) = config.timeouts.connect() {
            builder = builder.connect_timeout(connect);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }

        Ok(Self::with_client(builder.build()?).trace(config.observability.trace_requests))
    }

    /// Create a request on an existing client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            headers: Vec::new(),
            body: Body::Empty,
            trace: false,
        }
    }

    /// Add every header from the map.
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Add a single header, replacing any earlier value for the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// Record the elapsed time of the request.
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    pub async fn get(self, url: &str) -> HttpResult<Response> {
        self.send(Method::GET, url).await
    }

    pub async fn post(self, url: &str) -> HttpResult<Response> {
        self.send(Method::POST, url).await
    }

    /// Execute the request with an arbitrary method.
    pub async fn send(self, method: Method, url: &str) -> HttpResult<Response> {
        let parsed = Url::parse(url).map_err(|source| HttpError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let mut headers = to_header_map(self.headers.iter().map(|(k, v)| (k, v)))?;

        let request_id = Uuid::new_v4();
        let mut builder = self.client.request(method.clone(), parsed);

        builder = match self.body {
            Body::Empty => builder.headers(headers),
            Body::Raw(bytes) => builder.headers(headers).body(bytes),
            Body::Json(value) => builder.headers(headers).json(&value),
            Body::Form(fields) => builder.headers(headers).form(&fields),
            Body::Multipart { fields, file } => {
                // multipart sets its own boundary-carrying content type
                headers.remove(CONTENT_TYPE);
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                let part = reqwest::multipart::Part::bytes(file.contents).file_name(file.file_name);
                builder.headers(headers).multipart(form.part(file.param, part))
            }
        };

        let start = Instant::now();
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    url = %url,
                    error = %e,
                    "Request failed"
                );
                return Err(e.into());
            }
        };

        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        let elapsed = self.trace.then(|| start.elapsed());

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = elapsed.map(|d| d.as_millis() as u64),
            "Request completed"
        );

        Ok(Response {
            status,
            headers: response_headers,
            body,
            elapsed,
        })
    }
}

fn client_builder(timeout: Duration) -> ClientBuilder {
    let builder = Client::builder();
    if timeout.is_zero() {
        builder
    } else {
        builder.timeout(timeout)
    }
}

fn to_header_map<'a, I>(pairs: I) -> HttpResult<HeaderMap>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }
    Ok(map)
}
