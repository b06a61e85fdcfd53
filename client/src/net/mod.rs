//! Networking for the fleet REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` executes `records::ApiRequest` descriptions in the browser and is
//! the only place the bearer token is attached.

pub mod api;
