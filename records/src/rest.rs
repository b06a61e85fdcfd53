//! Generic CRUD request builders shared by every resource.
//!
//! DESIGN
//! ======
//! Each resource declares its collection path once; list/get/delete come for
//! free and resources with a JSON draft also get create/update. Operations
//! that do not fit (multipart uploads, OTP, dispatch transitions) live in the
//! resource's own module.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ApiRequest, Record, RecordId, RequestError};

/// A resource exposed as a REST collection.
pub trait Resource: Record + DeserializeOwned {
    /// Collection path, e.g. `/vehicles`.
    const COLLECTION: &'static str;
}

/// A resource created and updated from a JSON draft.
pub trait Editable: Resource {
    type Draft: Serialize;
}

#[must_use]
pub fn member_path<R: Resource>(id: RecordId) -> String {
    format!("{}/{id}", R::COLLECTION)
}

/// `GET /{collection}`
#[must_use]
pub fn list<R: Resource>() -> ApiRequest {
    ApiRequest::get(R::COLLECTION)
}

/// `GET /{collection}/{id}`
#[must_use]
pub fn get<R: Resource>(id: RecordId) -> ApiRequest {
    ApiRequest::get(member_path::<R>(id))
}

/// `DELETE /{collection}/{id}`
#[must_use]
pub fn delete<R: Resource>(id: RecordId) -> ApiRequest {
    ApiRequest::delete(member_path::<R>(id))
}

/// `POST /{collection}` with the draft as JSON.
///
/// # Errors
///
/// Returns [`RequestError::Encode`] if the draft fails to serialize.
pub fn create<R: Editable>(draft: &R::Draft) -> Result<ApiRequest, RequestError> {
    ApiRequest::post_json(R::COLLECTION, draft)
}

/// `PATCH /{collection}/{id}` with the draft as JSON.
///
/// # Errors
///
/// Returns [`RequestError::Encode`] if the draft fails to serialize.
pub fn update<R: Editable>(id: RecordId, draft: &R::Draft) -> Result<ApiRequest, RequestError> {
    ApiRequest::patch_json(member_path::<R>(id), draft)
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;
