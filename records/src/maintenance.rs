//! Maintenance scheduling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::{Editable, Resource, member_path};
use crate::{ApiRequest, Record, RecordId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    #[default]
    Pending,
    Completed,
}

impl MaintenanceStatus {
    pub const ALL: [Self; 2] = [Self::Pending, Self::Completed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    /// Status after a toggle-status call.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub maintenance_type: String,
    pub maintenance_date: NaiveDate,
    pub maintenance_cost: f64,
    #[serde(default)]
    pub maintenance_address: String,
    #[serde(default)]
    pub status: MaintenanceStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceScheduleDraft {
    pub vehicle_id: RecordId,
    pub maintenance_type: String,
    pub maintenance_date: NaiveDate,
    pub maintenance_cost: f64,
    pub maintenance_address: String,
    pub status: MaintenanceStatus,
}

impl Record for MaintenanceSchedule {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for MaintenanceSchedule {
    const COLLECTION: &'static str = "/maintenance-scheduling";
}

impl Editable for MaintenanceSchedule {
    type Draft = MaintenanceScheduleDraft;
}

impl MaintenanceSchedule {
    /// Pending work whose date has passed.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == MaintenanceStatus::Pending && self.maintenance_date < today
    }

    #[must_use]
    pub fn draft(&self) -> MaintenanceScheduleDraft {
        MaintenanceScheduleDraft {
            vehicle_id: self.vehicle_id,
            maintenance_type: self.maintenance_type.clone(),
            maintenance_date: self.maintenance_date,
            maintenance_cost: self.maintenance_cost,
            maintenance_address: self.maintenance_address.clone(),
            status: self.status,
        }
    }
}

/// `PATCH /maintenance-scheduling/{id}/toggle-status`
#[must_use]
pub fn toggle_status(id: RecordId) -> ApiRequest {
    ApiRequest::patch_empty(format!("{}/toggle-status", member_path::<MaintenanceSchedule>(id)))
}

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;
