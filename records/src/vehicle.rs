//! Vehicle profiles, including registration (OR/CR) and insurance (TPL/CI).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::{Editable, Resource};
use crate::{Record, RecordId};

/// Operational status of a vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Active,
    UnderMaintenance,
    Inactive,
}

impl VehicleStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::UnderMaintenance, Self::Inactive];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::UnderMaintenance => "under_maintenance",
            Self::Inactive => "inactive",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderMaintenance => "Under Maintenance",
            Self::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

/// A bus in the fleet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: RecordId,
    /// Operator-assigned unit number, e.g. `"BUS-014"`.
    pub vehicle_number: String,
    pub plate_number: String,
    pub vehicle_type: String,
    pub seating_capacity: u32,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub status: VehicleStatus,
    /// Official Receipt number.
    pub or_number: Option<String>,
    pub or_date_issued: Option<NaiveDate>,
    /// Certificate of Registration number.
    pub cr_number: Option<String>,
    pub cr_date_issued: Option<NaiveDate>,
    /// Third-Party Liability policy.
    pub tpl_policy_number: Option<String>,
    pub tpl_expiry_date: Option<NaiveDate>,
    /// Comprehensive Insurance policy.
    pub ci_policy_number: Option<String>,
    pub ci_expiry_date: Option<NaiveDate>,
}

/// Create/update payload for a vehicle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub vehicle_number: String,
    pub plate_number: String,
    pub vehicle_type: String,
    pub seating_capacity: u32,
    pub route: String,
    pub status: VehicleStatus,
    pub or_number: Option<String>,
    pub or_date_issued: Option<NaiveDate>,
    pub cr_number: Option<String>,
    pub cr_date_issued: Option<NaiveDate>,
    pub tpl_policy_number: Option<String>,
    pub tpl_expiry_date: Option<NaiveDate>,
    pub ci_policy_number: Option<String>,
    pub ci_expiry_date: Option<NaiveDate>,
}

impl Record for Vehicle {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Vehicle {
    const COLLECTION: &'static str = "/vehicles";
}

impl Editable for Vehicle {
    type Draft = VehicleDraft;
}

impl Vehicle {
    /// Short label used wherever another record points at this vehicle.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.vehicle_number, self.plate_number)
    }

    /// Insurance policies that expire on or before `today + within_days`.
    ///
    /// Already-expired policies are included.
    #[must_use]
    pub fn expiring_insurance(&self, today: NaiveDate, within_days: i64) -> Vec<&'static str> {
        let horizon = today + chrono::Duration::days(within_days);
        [("TPL", self.tpl_expiry_date), ("CI", self.ci_expiry_date)]
            .into_iter()
            .filter_map(|(kind, expiry)| expiry.filter(|date| *date <= horizon).map(|_| kind))
            .collect()
    }

    #[must_use]
    pub fn draft(&self) -> VehicleDraft {
        VehicleDraft {
            vehicle_number: self.vehicle_number.clone(),
            plate_number: self.plate_number.clone(),
            vehicle_type: self.vehicle_type.clone(),
            seating_capacity: self.seating_capacity,
            route: self.route.clone(),
            status: self.status,
            or_number: self.or_number.clone(),
            or_date_issued: self.or_date_issued,
            cr_number: self.cr_number.clone(),
            cr_date_issued: self.cr_date_issued,
            tpl_policy_number: self.tpl_policy_number.clone(),
            tpl_expiry_date: self.tpl_expiry_date,
            ci_policy_number: self.ci_policy_number.clone(),
            ci_expiry_date: self.ci_expiry_date,
        }
    }
}

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;
