//! Vehicle assignments: one vehicle crewed by one or two personnel.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::rest::{Editable, Resource};
use crate::vehicle::Vehicle;
use crate::{Record, RecordId};

/// Upper bound on crew per assignment (driver + PAO).
pub const MAX_CREW: usize = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleAssignment {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub user_profile_ids: Vec<RecordId>,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAssignmentDraft {
    pub vehicle_id: RecordId,
    pub user_profile_ids: Vec<RecordId>,
}

impl Record for VehicleAssignment {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for VehicleAssignment {
    const COLLECTION: &'static str = "/vehicle-assignments";
}

impl Editable for VehicleAssignment {
    type Draft = VehicleAssignmentDraft;
}

impl VehicleAssignment {
    #[must_use]
    pub fn draft(&self) -> VehicleAssignmentDraft {
        VehicleAssignmentDraft { vehicle_id: self.vehicle_id, user_profile_ids: self.user_profile_ids.clone() }
    }
}

/// An assignment joined with display labels for its vehicle and crew.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssignmentRow {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub vehicle: String,
    pub crew: Vec<String>,
}

impl Record for AssignmentRow {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl AssignmentRow {
    #[must_use]
    pub fn crew_label(&self) -> String {
        if self.crew.is_empty() {
            return "—".to_owned();
        }
        self.crew.join(", ")
    }
}

/// Resolve assignment ids against the fetched vehicle and profile lists.
///
/// Ids missing from either list render as `#<id>`; the collections are
/// fetched independently and one of them may have failed.
#[must_use]
pub fn resolve_rows(
    assignments: &[VehicleAssignment],
    vehicles: &[Vehicle],
    profiles: &[UserProfile],
) -> Vec<AssignmentRow> {
    let vehicles: HashMap<RecordId, &Vehicle> = vehicles.iter().map(|v| (v.id, v)).collect();
    let profiles: HashMap<RecordId, &UserProfile> = profiles.iter().map(|p| (p.id, p)).collect();

    assignments
        .iter()
        .map(|assignment| AssignmentRow {
            id: assignment.id,
            vehicle_id: assignment.vehicle_id,
            vehicle: vehicles
                .get(&assignment.vehicle_id)
                .map_or_else(|| format!("#{}", assignment.vehicle_id), |v| v.label()),
            crew: assignment
                .user_profile_ids
                .iter()
                .map(|id| profiles.get(id).map_or_else(|| format!("#{id}"), |p| p.full_name()))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;
