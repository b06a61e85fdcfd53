//! Dashboard summary assembled from independently fetched collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard fires every collection fetch at once and assembles the
//! summary when all have resolved. A failed fetch is logged and counts as an
//! empty collection; the others still contribute.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::{DateTime, NaiveDate, Utc};
use records::assignment::VehicleAssignment;
use records::device::{Connectivity, Device};
use records::dispatch::DispatchLog;
use records::feedback::FeedbackLog;
use records::maintenance::{MaintenanceSchedule, MaintenanceStatus};
use records::profile::{Position, UserProfile};
use records::vehicle::{Vehicle, VehicleStatus};

use crate::net::api::{self, ApiError};

/// Days ahead an insurance expiry is flagged.
pub const INSURANCE_WARNING_DAYS: i64 = 30;

/// Every collection the dashboard loads.
#[derive(Debug)]
pub struct DashboardFetch {
    pub vehicles: Result<Vec<Vehicle>, ApiError>,
    pub profiles: Result<Vec<UserProfile>, ApiError>,
    pub assignments: Result<Vec<VehicleAssignment>, ApiError>,
    pub maintenance: Result<Vec<MaintenanceSchedule>, ApiError>,
    pub devices: Result<Vec<Device>, ApiError>,
    pub dispatches: Result<Vec<DispatchLog>, ApiError>,
    pub feedback: Result<Vec<FeedbackLog>, ApiError>,
}

/// One vehicle with an insurance policy about to lapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsuranceAlert {
    pub vehicle: String,
    pub policies: Vec<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub vehicles_total: usize,
    pub vehicles_active: usize,
    pub vehicles_in_maintenance: usize,
    pub drivers: usize,
    pub paos: usize,
    pub assignments: usize,
    pub maintenance_pending: usize,
    pub maintenance_overdue: usize,
    pub devices_online: usize,
    pub devices_total: usize,
    pub open_dispatches: usize,
    pub feedback_count: usize,
    pub average_rating: Option<f64>,
    pub insurance_alerts: Vec<InsuranceAlert>,
    /// Collections that failed to load.
    pub failed: Vec<&'static str>,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
}

fn settle<T>(name: &'static str, result: Result<Vec<T>, ApiError>, failed: &mut Vec<&'static str>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        let _ = api::report(name, &e);
        failed.push(name);
        Vec::new()
    })
}

impl DashboardSummary {
    #[allow(clippy::cast_precision_loss)]
    pub fn assemble(fetch: DashboardFetch, today: NaiveDate, now: DateTime<Utc>) -> Self {
        let mut failed = Vec::new();
        let vehicles = settle("vehicles", fetch.vehicles, &mut failed);
        let profiles = settle("personnel", fetch.profiles, &mut failed);
        let assignments = settle("assignments", fetch.assignments, &mut failed);
        let maintenance = settle("maintenance", fetch.maintenance, &mut failed);
        let devices = settle("devices", fetch.devices, &mut failed);
        let dispatches = settle("dispatch", fetch.dispatches, &mut failed);
        let feedback = settle("feedback", fetch.feedback, &mut failed);

        let count_vehicles = |status: VehicleStatus| vehicles.iter().filter(|v| v.status == status).count();
        let count_position = |position: Position| profiles.iter().filter(|p| p.position == position).count();

        let average_rating = (!feedback.is_empty()).then(|| {
            let total: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
            f64::from(total) / feedback.len() as f64
        });

        let insurance_alerts = vehicles
            .iter()
            .filter_map(|v| {
                let policies = v.expiring_insurance(today, INSURANCE_WARNING_DAYS);
                (!policies.is_empty()).then(|| InsuranceAlert { vehicle: v.label(), policies })
            })
            .collect();

        Self {
            vehicles_total: vehicles.len(),
            vehicles_active: count_vehicles(VehicleStatus::Active),
            vehicles_in_maintenance: count_vehicles(VehicleStatus::UnderMaintenance),
            drivers: count_position(Position::Driver),
            paos: count_position(Position::Pao),
            assignments: assignments.len(),
            maintenance_pending: maintenance.iter().filter(|m| m.status == MaintenanceStatus::Pending).count(),
            maintenance_overdue: maintenance.iter().filter(|m| m.is_overdue(today)).count(),
            devices_online: devices.iter().filter(|d| d.connectivity(now) == Connectivity::Online).count(),
            devices_total: devices.len(),
            open_dispatches: dispatches.iter().filter(|d| d.is_open()).count(),
            feedback_count: feedback.len(),
            average_rating,
            insurance_alerts,
            failed,
        }
    }

    pub fn average_rating_label(&self) -> String {
        self.average_rating.map_or_else(|| "—".to_owned(), |avg| format!("{avg:.1} / 5"))
    }
}
