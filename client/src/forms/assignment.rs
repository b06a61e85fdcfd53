//! Vehicle assignment form: one vehicle, up to two crew members.
//!
//! Slot 0 is the driver select and slot 1 the PAO select. Stored
//! assignments keep crew as an unordered id list, so editing places each
//! id by the person's position.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use records::assignment::{MAX_CREW, VehicleAssignment, VehicleAssignmentDraft};
use records::profile::{Position, UserProfile};
use records::{ApiRequest, RecordId, RequestError};

use super::{FormMode, RecordForm, editable_request, parse_optional, parse_required};

const DRIVER_SLOT: usize = 0;
const PAO_SLOT: usize = 1;

/// Select values are record ids as strings; empty means "none chosen".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentForm {
    pub vehicle_id: String,
    pub crew: [String; MAX_CREW],
}

impl AssignmentForm {
    /// Put each crew id in the slot for its position. Ids that are not a
    /// known driver or PAO, or whose slot is taken, fill the first free slot.
    pub fn place_crew(&mut self, user_profile_ids: &[RecordId], profiles: &[UserProfile]) {
        let mut crew: [String; MAX_CREW] = Default::default();
        let mut unplaced = Vec::new();
        for id in user_profile_ids {
            let slot = match profiles.iter().find(|p| p.id == *id).map(|p| p.position) {
                Some(Position::Driver) => Some(DRIVER_SLOT),
                Some(Position::Pao) => Some(PAO_SLOT),
                _ => None,
            };
            match slot {
                Some(slot) if crew[slot].is_empty() => crew[slot] = id.to_string(),
                _ => unplaced.push(id),
            }
        }
        for id in unplaced {
            if let Some(free) = crew.iter_mut().find(|slot| slot.is_empty()) {
                *free = id.to_string();
            }
        }
        self.crew = crew;
    }
}

impl RecordForm for AssignmentForm {
    type Record = VehicleAssignment;
    type Draft = VehicleAssignmentDraft;

    fn from_record(record: &VehicleAssignment) -> Self {
        let mut crew: [String; MAX_CREW] = Default::default();
        for (slot, id) in crew.iter_mut().zip(&record.user_profile_ids) {
            *slot = id.to_string();
        }
        Self { vehicle_id: record.vehicle_id.to_string(), crew }
    }

    fn validate(&self) -> Result<VehicleAssignmentDraft, &'static str> {
        let vehicle_id: RecordId = parse_required(&self.vehicle_id, "Choose a vehicle.")?;
        let mut user_profile_ids = Vec::with_capacity(MAX_CREW);
        for slot in &self.crew {
            if let Some(id) = parse_optional::<RecordId>(slot, "Choose crew from the list.")? {
                if user_profile_ids.contains(&id) {
                    return Err("The same person cannot fill both crew slots.");
                }
                user_profile_ids.push(id);
            }
        }
        if user_profile_ids.is_empty() {
            return Err("Assign at least one crew member.");
        }
        Ok(VehicleAssignmentDraft { vehicle_id, user_profile_ids })
    }

    fn request(&self, mode: FormMode, draft: &VehicleAssignmentDraft) -> Result<ApiRequest, RequestError> {
        editable_request::<VehicleAssignment>(mode, draft)
    }
}
