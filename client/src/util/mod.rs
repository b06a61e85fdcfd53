//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, theme, dates) from page
//! and component logic so those stay testable off the browser.

pub mod auth;
pub mod theme;
pub mod time;
