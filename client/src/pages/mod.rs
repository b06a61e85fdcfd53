//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch, merge, dialogs) and
//! delegates rendering details to `components`. Record pages share the
//! request helpers in `list_actions`.

pub mod assignments;
pub mod dashboard;
pub mod devices;
pub mod dispatch;
pub mod feedback;
pub mod feedback_submit;
pub mod fuel_logs;
pub(crate) mod list_actions;
pub mod login;
pub mod maintenance;
pub mod personnel;
pub mod vehicles;
