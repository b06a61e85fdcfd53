//! Browser transport for the fleet REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! API is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s. Pages log the detailed error and show
//! [`ApiError::banner`] so failures degrade to a message instead of a crash.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::rest::{self, Resource};
use records::{ApiRequest, RequestError};
use serde::de::DeserializeOwned;

/// API base used when `FLEET_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

const GENERIC_BANNER: &str = "Something went wrong. Please try again.";
const SESSION_BANNER: &str = "Your session has expired. Please sign in again.";

/// Failure while talking to the fleet API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// User-facing message. Details stay in the log.
    #[must_use]
    pub fn banner(&self) -> &'static str {
        if self.is_unauthorized() { SESSION_BANNER } else { GENERIC_BANNER }
    }
}

/// Base URL of the fleet API, fixed at compile time.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("FLEET_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Execute `request` and decode the JSON response body.
///
/// # Errors
///
/// Returns an error on network failure, a non-2xx status, or a body that
/// does not decode as `T`.
pub async fn fetch<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&request).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Execute `request`, discarding any response body.
///
/// # Errors
///
/// Returns an error on network failure or a non-2xx status.
pub async fn execute(request: ApiRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(&request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `GET` a whole collection.
///
/// # Errors
///
/// See [`fetch`].
pub async fn fetch_all<R: Resource>() -> Result<Vec<R>, ApiError> {
    fetch(rest::list::<R>()).await
}

/// Log a failed call and return its banner text.
pub fn report(context: &str, err: &ApiError) -> String {
    log::warn!("{context} failed: {err}");
    err.banner().to_owned()
}

#[cfg(feature = "hydrate")]
async fn send(request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::RequestBuilder;
    use records::Body;

    let url = request.url(api_base_url());
    let mut builder = RequestBuilder::new(&url).method(gloo_method(request.method));
    if let Some(token) = crate::util::auth::stored_token() {
        builder = builder.header("Authorization", &bearer_header(&token));
    }

    let prepared = match &request.body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(value),
        Body::Multipart(parts) => builder.body(form_data(parts)?),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    log::debug!("{} {}", request.method.as_str(), request.path);
    let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: records::Method) -> gloo_net::http::Method {
    match method {
        records::Method::Get => gloo_net::http::Method::GET,
        records::Method::Post => gloo_net::http::Method::POST,
        records::Method::Patch => gloo_net::http::Method::PATCH,
        records::Method::Delete => gloo_net::http::Method::DELETE,
    }
}

#[cfg(feature = "hydrate")]
fn form_data(parts: &[records::FormPart]) -> Result<web_sys::FormData, ApiError> {
    use records::PartValue;

    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let data = web_sys::FormData::new().map_err(js_err)?;
    for part in parts {
        match &part.value {
            PartValue::Text(text) => data.append_with_str(&part.name, text).map_err(js_err)?,
            PartValue::File { file_name, bytes } => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                let blob = web_sys::Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&array)).map_err(js_err)?;
                data.append_with_blob_and_filename(&part.name, &blob, file_name).map_err(js_err)?;
            }
        }
    }
    Ok(data)
}
