//! `reqwest` executor for the request descriptions built in `records`.
//!
//! Every command builds an [`ApiRequest`] and hands it here; this module
//! owns the HTTP client, the base URL and the bearer token.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Instant;

use records::{ApiRequest, Body, FormPart, Method, PartValue};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CliError;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, CliError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: base_url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Admin endpoints refuse anonymous calls; fail before touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingToken`] when no token was configured.
    pub fn require_token(&self) -> Result<(), CliError> {
        if self.token.is_none() {
            return Err(CliError::MissingToken);
        }
        Ok(())
    }

    /// Translate a request description into a ready-to-send `reqwest` request.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or body is rejected by `reqwest`.
    pub fn build(&self, request: &ApiRequest) -> Result<reqwest::Request, CliError> {
        let mut builder = self.http.request(http_method(request.method), request.url(&self.base_url));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::Multipart(parts) => builder.multipart(multipart_form(parts)),
        };
        Ok(builder.build()?)
    }

    /// Send a request and return its JSON body (`Null` for an empty body).
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx status or an
    /// undecodable body.
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value, CliError> {
        let started = Instant::now();
        let response = self.http.execute(self.build(request)?).await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "api call"
        );

        if !status.is_success() {
            return Err(CliError::Status { status: status.as_u16(), body: text });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a request and decode the body as `T`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::execute`], plus a decode failure for `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, CliError> {
        Ok(serde_json::from_value(self.execute(request).await?)?)
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn multipart_form(parts: &[FormPart]) -> Form {
    parts.iter().fold(Form::new(), |form, part| match &part.value {
        PartValue::Text(text) => form.text(part.name.clone(), text.clone()),
        PartValue::File { file_name, bytes } => {
            form.part(part.name.clone(), Part::bytes(bytes.clone()).file_name(file_name.clone()))
        }
    })
}

/// Collapse a failed collection fetch to an empty list, logging the cause.
pub fn or_empty<T>(collection: &str, result: Result<Vec<T>, CliError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(collection, error = %e, "fetch failed; treating as empty");
        Vec::new()
    })
}
