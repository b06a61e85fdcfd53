//! Joined views that need more than one collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assignments are stored as bare ids. To print vehicle labels and crew
//! names the CLI fetches vehicles, personnel, assignments and dispatch logs
//! concurrently and joins them once every fetch has resolved. A failed
//! lookup fetch (vehicles, personnel) is logged and contributes an empty
//! collection, so ids it would have resolved print as `#<id>`. A failed
//! fetch of a collection the view is built from fails the command.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use records::RecordId;
use records::assignment::{AssignmentRow, VehicleAssignment, resolve_rows};
use records::dispatch::{self, DispatchLog, DispatchRow};
use records::profile::UserProfile;
use records::rest;
use records::vehicle::Vehicle;
use serde::Serialize;

use crate::error::CliError;
use crate::transport::{ApiClient, or_empty};

/// One line of `overview`: an assignment plus its unfinished dispatch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverviewRow {
    #[serde(flatten)]
    pub assignment: AssignmentRow,
    pub crew_label: String,
    pub dispatch_id: Option<RecordId>,
    pub dispatch_phase: Option<&'static str>,
}

/// The collections a view is built from. The others are lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Required {
    Assignments,
    DispatchLogs,
    Both,
}

impl Required {
    fn assignments(self) -> bool {
        matches!(self, Self::Assignments | Self::Both)
    }

    fn dispatch_logs(self) -> bool {
        matches!(self, Self::DispatchLogs | Self::Both)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub assignments: Vec<AssignmentRow>,
    pub dispatch_logs: Vec<DispatchLog>,
}

impl Snapshot {
    /// Fetch the four collections concurrently and join them.
    ///
    /// # Errors
    ///
    /// Returns the fetch error of any collection named by `required`.
    pub async fn fetch(api: &ApiClient, required: Required) -> Result<Self, CliError> {
        let vehicles_request = rest::list::<Vehicle>();
        let profiles_request = rest::list::<UserProfile>();
        let assignments_request = rest::list::<VehicleAssignment>();
        let logs_request = rest::list::<DispatchLog>();
        let (vehicles, profiles, assigned, logs) = tokio::join!(
            api.fetch::<Vec<Vehicle>>(&vehicles_request),
            api.fetch::<Vec<UserProfile>>(&profiles_request),
            api.fetch::<Vec<VehicleAssignment>>(&assignments_request),
            api.fetch::<Vec<DispatchLog>>(&logs_request),
        );
        let vehicles = or_empty("vehicles", vehicles);
        let profiles = or_empty("user-profiles", profiles);
        let assigned = take("vehicle-assignments", assigned, required.assignments())?;
        let dispatch_logs = take("dispatch-logs", logs, required.dispatch_logs())?;
        tracing::debug!(
            vehicles = vehicles.len(),
            profiles = profiles.len(),
            assignments = assigned.len(),
            dispatch_logs = dispatch_logs.len(),
            "snapshot fetched"
        );
        Ok(Self { assignments: resolve_rows(&assigned, &vehicles, &profiles), dispatch_logs })
    }

    /// Dispatch logs labelled with their vehicle, newest first.
    #[must_use]
    pub fn dispatch_rows(&self) -> Vec<DispatchRow> {
        dispatch::dispatch_rows(&self.dispatch_logs, &self.assignments)
    }

    #[must_use]
    pub fn overview(&self) -> Vec<OverviewRow> {
        self.assignments
            .iter()
            .map(|row| {
                let open = dispatch::open_log_for(&self.dispatch_logs, row.id);
                OverviewRow {
                    crew_label: row.crew_label(),
                    dispatch_id: open.map(|log| log.id),
                    dispatch_phase: open.map(|log| log.phase().label()),
                    assignment: row.clone(),
                }
            })
            .collect()
    }
}

fn take<T>(collection: &str, result: Result<Vec<T>, CliError>, required: bool) -> Result<Vec<T>, CliError> {
    if required {
        result
    } else {
        Ok(or_empty(collection, result))
    }
}
