//! Personnel profile form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use records::profile::{PersonnelStatus, Position, UserProfile, UserProfileDraft};
use records::{ApiRequest, RequestError};

use super::{FormMode, RecordForm, editable_request, optional_text, parse_optional_date, required, show};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub position: String,
    pub contact_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub license_number: String,
    pub date_hired: String,
    pub status: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            position: Position::default().as_str().to_owned(),
            contact_number: String::new(),
            address: String::new(),
            date_of_birth: String::new(),
            license_number: String::new(),
            date_hired: String::new(),
            status: PersonnelStatus::default().as_str().to_owned(),
        }
    }
}

impl RecordForm for ProfileForm {
    type Record = UserProfile;
    type Draft = UserProfileDraft;

    fn from_record(record: &UserProfile) -> Self {
        Self {
            first_name: record.first_name.clone(),
            middle_name: show(record.middle_name.as_ref()),
            last_name: record.last_name.clone(),
            position: record.position.as_str().to_owned(),
            contact_number: record.contact_number.clone(),
            address: record.address.clone(),
            date_of_birth: show(record.date_of_birth),
            license_number: show(record.license_number.as_ref()),
            date_hired: show(record.date_hired),
            status: record.status.as_str().to_owned(),
        }
    }

    fn validate(&self) -> Result<UserProfileDraft, &'static str> {
        let first_name = required(&self.first_name, "First name is required.")?;
        let last_name = required(&self.last_name, "Last name is required.")?;
        let position = Position::parse(&self.position).ok_or("Choose a position.")?;
        let contact_number = required(&self.contact_number, "Contact number is required.")?;
        let license_number = optional_text(&self.license_number);
        if position == Position::Driver && license_number.is_none() {
            return Err("Drivers need a license number.");
        }
        Ok(UserProfileDraft {
            first_name,
            middle_name: optional_text(&self.middle_name),
            last_name,
            position,
            contact_number,
            address: self.address.trim().to_owned(),
            date_of_birth: parse_optional_date(&self.date_of_birth, "Birth date must be YYYY-MM-DD.")?,
            license_number,
            date_hired: parse_optional_date(&self.date_hired, "Hire date must be YYYY-MM-DD.")?,
            status: PersonnelStatus::parse(&self.status).ok_or("Choose a status.")?,
        })
    }

    fn request(&self, mode: FormMode, draft: &UserProfileDraft) -> Result<ApiRequest, RequestError> {
        editable_request::<UserProfile>(mode, draft)
    }
}
