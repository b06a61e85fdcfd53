//! Maintenance schedule form.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use records::maintenance::{MaintenanceSchedule, MaintenanceScheduleDraft, MaintenanceStatus};
use records::{ApiRequest, RequestError};

use super::{FormMode, RecordForm, editable_request, parse_date, parse_required, required};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaintenanceForm {
    pub vehicle_id: String,
    pub maintenance_type: String,
    pub maintenance_date: String,
    pub maintenance_cost: String,
    pub maintenance_address: String,
    pub status: String,
}

impl Default for MaintenanceForm {
    fn default() -> Self {
        Self {
            vehicle_id: String::new(),
            maintenance_type: String::new(),
            maintenance_date: String::new(),
            maintenance_cost: String::new(),
            maintenance_address: String::new(),
            status: MaintenanceStatus::default().as_str().to_owned(),
        }
    }
}

impl RecordForm for MaintenanceForm {
    type Record = MaintenanceSchedule;
    type Draft = MaintenanceScheduleDraft;

    fn from_record(record: &MaintenanceSchedule) -> Self {
        Self {
            vehicle_id: record.vehicle_id.to_string(),
            maintenance_type: record.maintenance_type.clone(),
            maintenance_date: record.maintenance_date.format("%Y-%m-%d").to_string(),
            maintenance_cost: format!("{:.2}", record.maintenance_cost),
            maintenance_address: record.maintenance_address.clone(),
            status: record.status.as_str().to_owned(),
        }
    }

    fn validate(&self) -> Result<MaintenanceScheduleDraft, &'static str> {
        let vehicle_id = parse_required(&self.vehicle_id, "Choose a vehicle.")?;
        let maintenance_type = required(&self.maintenance_type, "Maintenance type is required.")?;
        let maintenance_date = parse_date(&self.maintenance_date, "Maintenance date must be YYYY-MM-DD.")?;
        let maintenance_cost: f64 = parse_required(&self.maintenance_cost, "Cost must be a number.")?;
        if !maintenance_cost.is_finite() || maintenance_cost < 0.0 {
            return Err("Cost must be a number.");
        }
        Ok(MaintenanceScheduleDraft {
            vehicle_id,
            maintenance_type,
            maintenance_date,
            maintenance_cost,
            maintenance_address: self.maintenance_address.trim().to_owned(),
            status: MaintenanceStatus::parse(&self.status).ok_or("Choose a status.")?,
        })
    }

    fn request(&self, mode: FormMode, draft: &MaintenanceScheduleDraft) -> Result<ApiRequest, RequestError> {
        editable_request::<MaintenanceSchedule>(mode, draft)
    }
}
