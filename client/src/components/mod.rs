//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome (shell, pagination, search, dialogs)
//! used by every record page. Page-specific markup stays in `pages`.

pub mod confirm_dialog;
pub mod crud_modal;
pub mod form_field;
pub mod list_status;
pub mod pagination;
pub mod search_bar;
pub mod shell;
