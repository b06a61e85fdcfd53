//! Reactive state types provided through Leptos context or owned by pages.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal` by their owners. Transitions are
//! methods so they can be tested without a reactive runtime.

pub mod auth;
pub mod dashboard;
pub mod feedback_flow;
pub mod list;
pub mod modal;
pub mod ui;
