//! Fuel purchase logs. Create and update are multipart because they carry
//! the receipt and odometer photos.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::request::multipart_fields;
use crate::rest::{Resource, member_path};
use crate::{ApiRequest, Body, FormPart, Method, Record, RecordId, RequestError};

pub const RECEIPT_FIELD: &str = "fuel_receipt";
pub const ODOMETER_PROOF_FIELD: &str = "odometer_proof";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelLog {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub purchase_date: NaiveDate,
    pub odometer_km: f64,
    pub fuel_type: String,
    pub fuel_price: f64,
    pub fuel_quantity: f64,
    pub fuel_cost: f64,
    /// URL of the uploaded receipt image.
    #[serde(default)]
    pub fuel_receipt: Option<String>,
    /// URL of the uploaded odometer photo.
    #[serde(default)]
    pub odometer_proof: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelLogDraft {
    pub vehicle_id: RecordId,
    pub purchase_date: NaiveDate,
    pub odometer_km: f64,
    pub fuel_type: String,
    pub fuel_price: f64,
    pub fuel_quantity: f64,
}

/// A file picked for upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Record for FuelLog {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for FuelLog {
    const COLLECTION: &'static str = "/fuel-logs";
}

impl FuelLog {
    #[must_use]
    pub fn draft(&self) -> FuelLogDraft {
        FuelLogDraft {
            vehicle_id: self.vehicle_id,
            purchase_date: self.purchase_date,
            odometer_km: self.odometer_km,
            fuel_type: self.fuel_type.clone(),
            fuel_price: self.fuel_price,
            fuel_quantity: self.fuel_quantity,
        }
    }
}

impl FuelLogDraft {
    #[must_use]
    pub fn fuel_cost(&self) -> f64 {
        fuel_cost(self.fuel_price, self.fuel_quantity)
    }
}

/// Price per litre times litres, rounded to centavos.
#[must_use]
pub fn fuel_cost(price: f64, quantity: f64) -> f64 {
    (price * quantity * 100.0).round() / 100.0
}

/// Peso amount with two decimals and thousands separators, e.g. `₱12,345.60`.
#[must_use]
pub fn format_peso(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}₱{grouped}.{cents}")
}

/// `POST /fuel-logs` as multipart.
///
/// # Errors
///
/// Returns an error if the draft fails to serialize.
pub fn create(draft: &FuelLogDraft, receipt: Option<&Upload>, odometer_proof: Option<&Upload>) -> Result<ApiRequest, RequestError> {
    Ok(ApiRequest {
        method: Method::Post,
        path: FuelLog::COLLECTION.to_owned(),
        body: Body::Multipart(form_parts(draft, receipt, odometer_proof)?),
    })
}

/// `PATCH /fuel-logs/{id}` as multipart. Files left as `None` keep the
/// server's current upload.
///
/// # Errors
///
/// Returns an error if the draft fails to serialize.
pub fn update(
    id: RecordId,
    draft: &FuelLogDraft,
    receipt: Option<&Upload>,
    odometer_proof: Option<&Upload>,
) -> Result<ApiRequest, RequestError> {
    Ok(ApiRequest {
        method: Method::Patch,
        path: member_path::<FuelLog>(id),
        body: Body::Multipart(form_parts(draft, receipt, odometer_proof)?),
    })
}

fn form_parts(
    draft: &FuelLogDraft,
    receipt: Option<&Upload>,
    odometer_proof: Option<&Upload>,
) -> Result<Vec<FormPart>, RequestError> {
    let mut parts = multipart_fields(draft)?;
    parts.push(FormPart::text("fuel_cost", format!("{:.2}", draft.fuel_cost())));
    for (field, upload) in [(RECEIPT_FIELD, receipt), (ODOMETER_PROOF_FIELD, odometer_proof)] {
        if let Some(upload) = upload {
            parts.push(FormPart::file(field, &upload.file_name, upload.bytes.clone()));
        }
    }
    Ok(parts)
}

#[cfg(test)]
#[path = "fuel_log_test.rs"]
mod fuel_log_test;
