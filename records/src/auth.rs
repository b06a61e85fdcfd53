//! Admin login returning the bearer token.

use serde::{Deserialize, Serialize};

use crate::{ApiRequest, RequestError};

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /auth/login`
///
/// # Errors
///
/// Returns an error if the credentials fail to serialize.
pub fn login(credentials: &Credentials) -> Result<ApiRequest, RequestError> {
    ApiRequest::post_json(LOGIN_PATH, credentials)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
