use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CityName, HospitalId, HospitalName, PhoneNumber};

/// Partner hospital where patients use the app.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: HospitalId,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHospital {
    pub name: HospitalName,
    pub city: CityName,
    pub phone: Option<PhoneNumber>,
    pub address: Option<String>,
}

impl NewHospital {
    #[must_use]
    pub fn new(
        name: HospitalName,
        city: CityName,
        phone: Option<PhoneNumber>,
        address: Option<String>,
    ) -> Self {
        Self {
            name,
            city,
            phone,
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
