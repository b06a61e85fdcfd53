//! Vehicle profile form.

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

use records::vehicle::{Vehicle, VehicleDraft, VehicleStatus};
use records::{ApiRequest, RequestError};

use super::{FormMode, RecordForm, editable_request, optional_text, parse_optional_date, parse_required, required, show};

const SEATING_MESSAGE: &str = "Seating capacity must be a positive whole number.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleForm {
    pub vehicle_number: String,
    pub plate_number: String,
    pub vehicle_type: String,
    pub seating_capacity: String,
    pub route: String,
    pub status: String,
    pub or_number: String,
    pub or_date_issued: String,
    pub cr_number: String,
    pub cr_date_issued: String,
    pub tpl_policy_number: String,
    pub tpl_expiry_date: String,
    pub ci_policy_number: String,
    pub ci_expiry_date: String,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self {
            vehicle_number: String::new(),
            plate_number: String::new(),
            vehicle_type: String::new(),
            seating_capacity: String::new(),
            route: String::new(),
            status: VehicleStatus::default().as_str().to_owned(),
            or_number: String::new(),
            or_date_issued: String::new(),
            cr_number: String::new(),
            cr_date_issued: String::new(),
            tpl_policy_number: String::new(),
            tpl_expiry_date: String::new(),
            ci_policy_number: String::new(),
            ci_expiry_date: String::new(),
        }
    }
}

impl RecordForm for VehicleForm {
    type Record = Vehicle;
    type Draft = VehicleDraft;

    fn from_record(record: &Vehicle) -> Self {
        Self {
            vehicle_number: record.vehicle_number.clone(),
            plate_number: record.plate_number.clone(),
            vehicle_type: record.vehicle_type.clone(),
            seating_capacity: record.seating_capacity.to_string(),
            route: record.route.clone(),
            status: record.status.as_str().to_owned(),
            or_number: show(record.or_number.as_ref()),
            or_date_issued: show(record.or_date_issued),
            cr_number: show(record.cr_number.as_ref()),
            cr_date_issued: show(record.cr_date_issued),
            tpl_policy_number: show(record.tpl_policy_number.as_ref()),
            tpl_expiry_date: show(record.tpl_expiry_date),
            ci_policy_number: show(record.ci_policy_number.as_ref()),
            ci_expiry_date: show(record.ci_expiry_date),
        }
    }

    fn validate(&self) -> Result<VehicleDraft, &'static str> {
        let vehicle_number = required(&self.vehicle_number, "Vehicle number is required.")?;
        let plate_number = required(&self.plate_number, "Plate number is required.")?;
        let vehicle_type = required(&self.vehicle_type, "Vehicle type is required.")?;
        let seating_capacity: u32 = parse_required(&self.seating_capacity, SEATING_MESSAGE)?;
        if seating_capacity == 0 {
            return Err(SEATING_MESSAGE);
        }
        Ok(VehicleDraft {
            vehicle_number,
            plate_number,
            vehicle_type,
            seating_capacity,
            route: self.route.trim().to_owned(),
            status: VehicleStatus::parse(&self.status).ok_or("Choose a vehicle status.")?,
            or_number: optional_text(&self.or_number),
            or_date_issued: parse_optional_date(&self.or_date_issued, "OR date must be YYYY-MM-DD.")?,
            cr_number: optional_text(&self.cr_number),
            cr_date_issued: parse_optional_date(&self.cr_date_issued, "CR date must be YYYY-MM-DD.")?,
            tpl_policy_number: optional_text(&self.tpl_policy_number),
            tpl_expiry_date: parse_optional_date(&self.tpl_expiry_date, "TPL expiry must be YYYY-MM-DD.")?,
            ci_policy_number: optional_text(&self.ci_policy_number),
            ci_expiry_date: parse_optional_date(&self.ci_expiry_date, "CI expiry must be YYYY-MM-DD.")?,
        })
    }

    fn request(&self, mode: FormMode, draft: &VehicleDraft) -> Result<ApiRequest, RequestError> {
        editable_request::<Vehicle>(mode, draft)
    }
}
