//! Transport-agnostic HTTP request descriptions.

use serde::Serialize;
use serde_json::Value;

/// Error returned while building a request payload.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The draft could not be serialized to JSON.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    /// Multipart payloads are built from JSON objects only.
    #[error("multipart payload must be a JSON object")]
    NotAnObject,
}

/// HTTP verbs used by the fleet API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Value carried by one multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File { file_name: String, bytes: Vec<u8> },
}

/// A named multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

impl FormPart {
    #[must_use]
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self { name: name.to_owned(), value: PartValue::Text(value.into()) }
    }

    #[must_use]
    pub fn file(name: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_owned(),
            value: PartValue::File { file_name: file_name.to_owned(), bytes },
        }
    }
}

/// Request body.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

/// One HTTP call against the fleet API, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/vehicles/4`.
    pub path: String,
    pub body: Body,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: Body::Empty }
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: Body::Empty }
    }

    #[must_use]
    pub fn patch_empty(path: impl Into<String>) -> Self {
        Self { method: Method::Patch, path: path.into(), body: Body::Empty }
    }

    /// Build a JSON `POST`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Encode`] if `payload` fails to serialize.
    pub fn post_json<T: Serialize + ?Sized>(path: impl Into<String>, payload: &T) -> Result<Self, RequestError> {
        Ok(Self { method: Method::Post, path: path.into(), body: Body::Json(serde_json::to_value(payload)?) })
    }

    /// Build a JSON `PATCH`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Encode`] if `payload` fails to serialize.
    pub fn patch_json<T: Serialize + ?Sized>(path: impl Into<String>, payload: &T) -> Result<Self, RequestError> {
        Ok(Self { method: Method::Patch, path: path.into(), body: Body::Json(serde_json::to_value(payload)?) })
    }

    /// Join this request's path onto an API base URL.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }

    /// JSON body, if any.
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Flatten a serializable draft into multipart text fields.
///
/// Top-level `null` fields are skipped; nested values are sent as JSON text.
///
/// # Errors
///
/// Returns an error if the draft does not serialize to a JSON object.
pub fn multipart_fields<T: Serialize>(payload: &T) -> Result<Vec<FormPart>, RequestError> {
    let Value::Object(map) = serde_json::to_value(payload)? else {
        return Err(RequestError::NotAnObject);
    };

    Ok(map
        .into_iter()
        .filter_map(|(name, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            Some(FormPart { name, value: PartValue::Text(text) })
        })
        .collect())
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
