//! Dispatch logs: the alley (terminal queue) and trip cycle of an assignment.
//!
//! DESIGN
//! ======
//! The server stamps each transition; the client derives the current phase
//! from which timestamps are present rather than trusting a status string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::AssignmentRow;
use crate::rest::{Resource, member_path};
use crate::{ApiRequest, Record, RecordId, RequestError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchLog {
    pub id: RecordId,
    pub vehicle_assignment_id: RecordId,
    #[serde(default)]
    pub status: String,
    pub alley_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub alley_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trip_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trip_end: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchPhase {
    InAlley,
    Queued,
    OnTrip,
    Completed,
}

impl DispatchPhase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InAlley => "In alley",
            Self::Queued => "Queued for trip",
            Self::OnTrip => "On trip",
            Self::Completed => "Completed",
        }
    }

    /// The one forward transition available from this phase.
    #[must_use]
    pub fn next_action(self) -> Option<DispatchAction> {
        match self {
            Self::InAlley => Some(DispatchAction::EndAlley),
            Self::Queued => Some(DispatchAction::StartTrip),
            Self::OnTrip => Some(DispatchAction::EndTrip),
            Self::Completed => None,
        }
    }
}

/// Transitions on an existing dispatch log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchAction {
    EndAlley,
    StartTrip,
    EndTrip,
}

impl DispatchAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EndAlley => "End alley",
            Self::StartTrip => "Start trip",
            Self::EndTrip => "End trip",
        }
    }

    fn segment(self) -> &'static str {
        match self {
            Self::EndAlley => "end-alley",
            Self::StartTrip => "start-trip",
            Self::EndTrip => "end-trip",
        }
    }

    /// `PATCH /dispatch-logs/{id}/{action}`
    #[must_use]
    pub fn request(self, log_id: RecordId) -> ApiRequest {
        ApiRequest::patch_empty(format!("{}/{}", member_path::<DispatchLog>(log_id), self.segment()))
    }
}

impl Record for DispatchLog {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for DispatchLog {
    const COLLECTION: &'static str = "/dispatch-logs";
}

impl DispatchLog {
    #[must_use]
    pub fn phase(&self) -> DispatchPhase {
        if self.trip_end.is_some() {
            DispatchPhase::Completed
        } else if self.trip_start.is_some() {
            DispatchPhase::OnTrip
        } else if self.alley_end.is_some() {
            DispatchPhase::Queued
        } else {
            DispatchPhase::InAlley
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase() != DispatchPhase::Completed
    }
}

/// The unfinished log for an assignment, if any.
#[must_use]
pub fn open_log_for(logs: &[DispatchLog], vehicle_assignment_id: RecordId) -> Option<&DispatchLog> {
    logs.iter()
        .filter(|log| log.vehicle_assignment_id == vehicle_assignment_id && log.is_open())
        .max_by_key(|log| log.id)
}

/// A dispatch log with its assignment's vehicle label, phase and next step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DispatchRow {
    #[serde(flatten)]
    pub log: DispatchLog,
    pub vehicle: String,
    pub phase: &'static str,
    pub next_action: Option<&'static str>,
}

impl Record for DispatchRow {
    fn id(&self) -> RecordId {
        self.log.id
    }
}

/// Join logs with resolved assignment rows, newest log first. A log whose
/// assignment is unknown is labelled `#<id>`.
#[must_use]
pub fn dispatch_rows(logs: &[DispatchLog], assignments: &[AssignmentRow]) -> Vec<DispatchRow> {
    let mut rows: Vec<DispatchRow> = logs
        .iter()
        .map(|log| {
            let phase = log.phase();
            DispatchRow {
                vehicle: assignments
                    .iter()
                    .find(|a| a.id == log.vehicle_assignment_id)
                    .map_or_else(|| format!("#{}", log.vehicle_assignment_id), |a| a.vehicle.clone()),
                phase: phase.label(),
                next_action: phase.next_action().map(DispatchAction::label),
                log: log.clone(),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.log.id.cmp(&a.log.id));
    rows
}

/// `POST /dispatch-logs/start-alley`
///
/// # Errors
///
/// Returns an error if the payload fails to serialize.
pub fn start_alley(vehicle_assignment_id: RecordId) -> Result<ApiRequest, RequestError> {
    ApiRequest::post_json(
        format!("{}/start-alley", DispatchLog::COLLECTION),
        &serde_json::json!({ "vehicle_assignment_id": vehicle_assignment_id }),
    )
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;
