//! Personnel profiles: drivers, passenger assistant officers and admins.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::rest::{Editable, Resource};
use crate::{Record, RecordId};

/// Personnel role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Driver,
    /// Passenger Assistant Officer.
    Pao,
    Admin,
}

impl Position {
    pub const ALL: [Self; 3] = [Self::Driver, Self::Pao, Self::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Pao => "pao",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Pao => "PAO",
            Self::Admin => "Admin",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|position| position.as_str() == raw)
    }

    /// Whether this role can be assigned to a vehicle.
    #[must_use]
    pub fn is_crew(self) -> bool {
        matches!(self, Self::Driver | Self::Pao)
    }
}

/// Employment status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonnelStatus {
    #[default]
    Active,
    OnLeave,
    Inactive,
}

impl PersonnelStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::OnLeave, Self::Inactive];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OnLeave => "on_leave",
            Self::Inactive => "inactive",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: RecordId,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub position: Position,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub date_hired: Option<NaiveDate>,
    #[serde(default)]
    pub status: PersonnelStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfileDraft {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub position: Position,
    pub contact_number: String,
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    pub license_number: Option<String>,
    pub date_hired: Option<NaiveDate>,
    pub status: PersonnelStatus,
}

impl Record for UserProfile {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for UserProfile {
    const COLLECTION: &'static str = "/user-profiles";
}

impl Editable for UserProfile {
    type Draft = UserProfileDraft;
}

impl UserProfile {
    /// `First M. Last`, or `First Last` without a middle name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().and_then(|m| m.trim().chars().next()) {
            Some(initial) => format!("{} {initial}. {}", self.first_name, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Age on `today`, if a birth date is on file.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.map(|birth| age_on(birth, today))
    }

    #[must_use]
    pub fn draft(&self) -> UserProfileDraft {
        UserProfileDraft {
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            position: self.position,
            contact_number: self.contact_number.clone(),
            address: self.address.clone(),
            date_of_birth: self.date_of_birth,
            license_number: self.license_number.clone(),
            date_hired: self.date_hired,
            status: self.status,
        }
    }
}

/// Whole years between `birth` and `today`.
///
/// The year only counts once the birthday has been reached; a 29 February
/// birthday is reached on 1 March in common years. Birth dates in the future
/// yield 0.
#[must_use]
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    if today <= birth {
        return 0;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;
