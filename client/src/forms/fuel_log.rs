//! Fuel log form with receipt and odometer photo uploads.
//!
//! Uploads are read from the file inputs when chosen and held in the form;
//! the request is multipart so the files ride along with the text fields.

#[cfg(test)]
#[path = "fuel_log_test.rs"]
mod fuel_log_test;

use records::fuel_log::{self, FuelLog, FuelLogDraft, Upload};
use records::{ApiRequest, RequestError};

use super::{FormMode, RecordForm, parse_date, parse_required, required};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FuelLogForm {
    pub vehicle_id: String,
    pub purchase_date: String,
    pub odometer_km: String,
    pub fuel_type: String,
    pub fuel_price: String,
    pub fuel_quantity: String,
    pub receipt: Option<Upload>,
    pub odometer_proof: Option<Upload>,
}

impl FuelLogForm {
    /// Live cost shown under the price and quantity inputs.
    pub fn cost_preview(&self) -> Option<f64> {
        let price: f64 = self.fuel_price.trim().parse().ok()?;
        let quantity: f64 = self.fuel_quantity.trim().parse().ok()?;
        Some(fuel_log::fuel_cost(price, quantity))
    }
}

fn positive(value: &str, message: &'static str) -> Result<f64, &'static str> {
    let parsed: f64 = parse_required(value, message)?;
    if parsed.is_finite() && parsed > 0.0 { Ok(parsed) } else { Err(message) }
}

impl RecordForm for FuelLogForm {
    type Record = FuelLog;
    type Draft = FuelLogDraft;

    fn from_record(record: &FuelLog) -> Self {
        Self {
            vehicle_id: record.vehicle_id.to_string(),
            purchase_date: record.purchase_date.format("%Y-%m-%d").to_string(),
            odometer_km: record.odometer_km.to_string(),
            fuel_type: record.fuel_type.clone(),
            fuel_price: format!("{:.2}", record.fuel_price),
            fuel_quantity: record.fuel_quantity.to_string(),
            receipt: None,
            odometer_proof: None,
        }
    }

    fn validate(&self) -> Result<FuelLogDraft, &'static str> {
        let vehicle_id = parse_required(&self.vehicle_id, "Choose a vehicle.")?;
        let purchase_date = parse_date(&self.purchase_date, "Purchase date must be YYYY-MM-DD.")?;
        let odometer_km = positive(&self.odometer_km, "Odometer reading must be a positive number.")?;
        let fuel_type = required(&self.fuel_type, "Fuel type is required.")?;
        let fuel_price = positive(&self.fuel_price, "Fuel price must be a positive number.")?;
        let fuel_quantity = positive(&self.fuel_quantity, "Fuel quantity must be a positive number.")?;
        Ok(FuelLogDraft { vehicle_id, purchase_date, odometer_km, fuel_type, fuel_price, fuel_quantity })
    }

    fn request(&self, mode: FormMode, draft: &FuelLogDraft) -> Result<ApiRequest, RequestError> {
        let receipt = self.receipt.as_ref();
        let odometer_proof = self.odometer_proof.as_ref();
        match mode {
            FormMode::Create => fuel_log::create(draft, receipt, odometer_proof),
            FormMode::Edit(id) => fuel_log::update(id, draft, receipt, odometer_proof),
        }
    }
}
