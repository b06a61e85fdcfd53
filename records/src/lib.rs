//! Shared record model and REST request builders for the fleet API.
//!
//! This crate owns the wire representation used by both `client` and `cli`.
//! Every service operation is a plain function returning an [`ApiRequest`]
//! (method, path, body); the browser and command-line transports only
//! execute those descriptions and attach the bearer token.

pub mod assignment;
pub mod auth;
pub mod device;
pub mod dispatch;
pub mod feedback;
pub mod fuel_log;
pub mod maintenance;
pub mod profile;
pub mod request;
pub mod rest;
pub mod vehicle;

pub use request::{ApiRequest, Body, FormPart, Method, PartValue, RequestError};
pub use rest::{Editable, Resource};

/// Server-assigned row identifier shared by every resource.
pub type RecordId = i64;

/// A persisted row with a server-assigned identifier.
pub trait Record {
    fn id(&self) -> RecordId;
}
