//! Tracking devices installed on vehicles.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{Editable, Resource};
use crate::{Record, RecordId};

/// How long after its last report a device still counts as online.
pub const ONLINE_WINDOW_SECS: i64 = 300;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: RecordId,
    pub device_name: String,
    pub serial_number: String,
    #[serde(default)]
    pub vehicle_id: Option<RecordId>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDraft {
    pub device_name: String,
    pub serial_number: String,
    pub vehicle_id: Option<RecordId>,
    pub is_active: bool,
}

/// Reporting state derived from `last_seen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
    NeverSeen,
    Disabled,
}

impl Connectivity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::NeverSeen => "Never seen",
            Self::Disabled => "Disabled",
        }
    }
}

impl Record for Device {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Device {
    const COLLECTION: &'static str = "/devices";
}

impl Editable for Device {
    type Draft = DeviceDraft;
}

impl Device {
    #[must_use]
    pub fn connectivity(&self, now: DateTime<Utc>) -> Connectivity {
        if !self.is_active {
            return Connectivity::Disabled;
        }
        match self.last_seen {
            None => Connectivity::NeverSeen,
            Some(seen) if now - seen <= Duration::seconds(ONLINE_WINDOW_SECS) => Connectivity::Online,
            Some(_) => Connectivity::Offline,
        }
    }

    #[must_use]
    pub fn draft(&self) -> DeviceDraft {
        DeviceDraft {
            device_name: self.device_name.clone(),
            serial_number: self.serial_number.clone(),
            vehicle_id: self.vehicle_id,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;
