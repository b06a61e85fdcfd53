//! Tracking device form.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use records::device::{Device, DeviceDraft};
use records::{ApiRequest, RequestError};

use super::{FormMode, RecordForm, editable_request, parse_optional, required, show};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceForm {
    pub device_name: String,
    pub serial_number: String,
    /// Empty when the device is not installed on a vehicle.
    pub vehicle_id: String,
    pub is_active: bool,
}

impl Default for DeviceForm {
    fn default() -> Self {
        Self { device_name: String::new(), serial_number: String::new(), vehicle_id: String::new(), is_active: true }
    }
}

impl RecordForm for DeviceForm {
    type Record = Device;
    type Draft = DeviceDraft;

    fn from_record(record: &Device) -> Self {
        Self {
            device_name: record.device_name.clone(),
            serial_number: record.serial_number.clone(),
            vehicle_id: show(record.vehicle_id),
            is_active: record.is_active,
        }
    }

    fn validate(&self) -> Result<DeviceDraft, &'static str> {
        Ok(DeviceDraft {
            device_name: required(&self.device_name, "Device name is required.")?,
            serial_number: required(&self.serial_number, "Serial number is required.")?,
            vehicle_id: parse_optional(&self.vehicle_id, "Choose a vehicle from the list.")?,
            is_active: self.is_active,
        })
    }

    fn request(&self, mode: FormMode, draft: &DeviceDraft) -> Result<ApiRequest, RequestError> {
        editable_request::<Device>(mode, draft)
    }
}
