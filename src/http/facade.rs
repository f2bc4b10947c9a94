//! One-call helpers over [`Request`].
//!
//! Every helper builds a fresh request, sends it and returns the raw
//! response body. The `https_*` variants skip TLS certificate verification.
//! Status codes are not inspected; only transport and setup failures error.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::http::body::{Body, FilePart};
use crate::http::error::HttpResult;
use crate::http::request::Request;
use crate::http::response::Response;

/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS);

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_MULTIPART_FORM: &str = "multipart/form-data";

/// GET `url` with the default timeout.
pub async fn get(url: &str) -> HttpResult<Vec<u8>> {
    body_of(Request::new(DEFAULT_TIMEOUT)?.get(url).await)
}

/// GET `url` with extra headers.
pub async fn get_with_headers(url: &str, headers: &HashMap<String, String>) -> HttpResult<Vec<u8>> {
    body_of(Request::new(DEFAULT_TIMEOUT)?.headers(headers).get(url).await)
}

/// GET `url` without verifying the server certificate.
pub async fn https_get(url: &str) -> HttpResult<Vec<u8>> {
    body_of(Request::insecure(DEFAULT_TIMEOUT)?.get(url).await)
}

/// GET `url` with extra headers, without verifying the server certificate.
pub async fn https_get_with_headers(
    url: &str,
    headers: &HashMap<String, String>,
) -> HttpResult<Vec<u8>> {
    body_of(Request::insecure(DEFAULT_TIMEOUT)?.headers(headers).get(url).await)
}

/// GET `url` and decode the JSON response into `T`.
///
/// Decode failures are logged before being returned.
pub async fn get_with_entity<T: DeserializeOwned>(
    url: &str,
    headers: &HashMap<String, String>,
    timeout: Duration,
) -> HttpResult<T> {
    let response = Request::new(timeout)?.headers(headers).get(url).await?;
    decode_entity(&response)
}

pub async fn get_with_timeout(
    url: &str,
    headers: &HashMap<String, String>,
    timeout: Duration,
) -> HttpResult<Vec<u8>> {
    body_of(Request::new(timeout)?.headers(headers).get(url).await)
}

pub async fn https_get_with_timeout(
    url: &str,
    headers: &HashMap<String, String>,
    timeout: Duration,
) -> HttpResult<Vec<u8>> {
    body_of(Request::insecure(timeout)?.headers(headers).get(url).await)
}

/// POST `body` to `url` with the default timeout.
///
/// A JSON body gets `Content-Type: application/json` unless `headers` sets one.
pub async fn post(
    url: &str,
    body: impl Into<Body>,
    headers: &HashMap<String, String>,
) -> HttpResult<Vec<u8>> {
    post_with_timeout(url, body, headers, DEFAULT_TIMEOUT).await
}

pub async fn post_with_timeout(
    url: &str,
    body: impl Into<Body>,
    headers: &HashMap<String, String>,
    timeout: Duration,
) -> HttpResult<Vec<u8>> {
    body_of(Request::new(timeout)?.headers(headers).body(body).post(url).await)
}

pub async fn https_post(
    url: &str,
    body: impl Into<Body>,
    headers: &HashMap<String, String>,
) -> HttpResult<Vec<u8>> {
    https_post_with_timeout(url, body, headers, DEFAULT_TIMEOUT).await
}

pub async fn https_post_with_timeout(
    url: &str,
    body: impl Into<Body>,
    headers: &HashMap<String, String>,
    timeout: Duration,
) -> HttpResult<Vec<u8>> {
    body_of(Request::insecure(timeout)?.headers(headers).body(body).post(url).await)
}

/// POST `body` to `url` and decode the JSON response into `T`.
///
/// Decode failures are logged before being returned.
pub async fn post_with_entity<T: DeserializeOwned>(
    url: &str,
    body: impl Into<Body>,
    headers: &HashMap<String, String>,
    timeout: Duration,
) -> HttpResult<T> {
    let response = Request::new(timeout)?
        .headers(headers)
        .body(body)
        .post(url)
        .await?;
    decode_entity(&response)
}

/// POST `body` as JSON. The content type is always `application/json`.
pub async fn json(
    url: &str,
    body: impl Into<Body>,
    headers: &HashMap<String, String>,
) -> HttpResult<Vec<u8>> {
    let request = Request::new(DEFAULT_TIMEOUT)?
        .headers(headers)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .body(body);
    body_of(request.post(url).await)
}

/// POST URL-encoded form fields. The content type is always
/// `application/x-www-form-urlencoded`.
pub async fn form(
    url: &str,
    fields: HashMap<String, String>,
    headers: &HashMap<String, String>,
) -> HttpResult<Vec<u8>> {
    let request = Request::new(DEFAULT_TIMEOUT)?
        .headers(headers)
        .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
        .body(Body::Form(fields));
    body_of(request.post(url).await)
}

/// POST a multipart form with text `fields` and one file.
pub async fn file(
    url: &str,
    fields: HashMap<String, String>,
    headers: &HashMap<String, String>,
    file: FilePart,
) -> HttpResult<Vec<u8>> {
    let request = Request::new(DEFAULT_TIMEOUT)?
        .headers(headers)
        .body(Body::Multipart { fields, file });
    body_of(request.post(url).await)
}

/// Like [`https_post_with_timeout`], also returning the response headers.
pub async fn https_post_with_timeout_res_header(
    url: &str,
    body: impl Into<Body>,
    headers: &HashMap<String, String>,
    timeout: Duration,
) -> HttpResult<(Vec<u8>, HeaderMap)> {
    let response = Request::insecure(timeout)?
        .headers(headers)
        .body(body)
        .post(url)
        .await?;
    Ok((response.body, response.headers))
}

fn body_of(response: HttpResult<Response>) -> HttpResult<Vec<u8>> {
    response.map(Response::into_body)
}

fn decode_entity<T: DeserializeOwned>(response: &Response) -> HttpResult<T> {
    response.json().inspect_err(|e| {
        tracing::error!(error = %e, status = response.status.as_u16(), "JSON decode failed");
    })
}
