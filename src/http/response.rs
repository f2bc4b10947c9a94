//! Buffered responses.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::http::error::{HttpError, HttpResult};

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Time from send to last body byte, recorded when tracing is enabled.
    pub elapsed: Option<Duration>,
}

impl Response {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> HttpResult<T> {
        serde_json::from_slice(&self.body).map_err(HttpError::Decode)
    }

    /// The body as UTF-8 text, lossily converted.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
