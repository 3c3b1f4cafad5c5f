use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{HospitalId, PopupId, PopupMessage, PopupTitle, TypeConstraintError};

/// Pop-up notification shown to app users on launch.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub id: PopupId,
    pub title: String,
    pub message: String,
    pub active: bool,
    /// Hospitals the pop-up is limited to; empty means everyone.
    #[serde(default)]
    pub hospital_ids: Vec<i32>,
    #[serde(default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(default)]
    pub ends_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPopup {
    pub title: PopupTitle,
    pub message: PopupMessage,
    pub active: bool,
    pub hospital_ids: Vec<HospitalId>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}

impl NewPopup {
    /// Builds a pop-up payload, rejecting a display window that ends before it starts.
    pub fn try_new(
        title: PopupTitle,
        message: PopupMessage,
        active: bool,
        hospital_ids: Vec<HospitalId>,
        starts_on: Option<NaiveDate>,
        ends_on: Option<NaiveDate>,
    ) -> Result<Self, TypeConstraintError> {
        if let (Some(start), Some(end)) = (starts_on, ends_on)
            && end < start
        {
            return Err(TypeConstraintError::InvalidValue(
                "pop-up ends before it starts".to_string(),
            ));
        }

        Ok(Self {
            title,
            message,
            active,
            hospital_ids,
            starts_on,
            ends_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn rejects_inverted_window() {
        let result = NewPopup::try_new(
            PopupTitle::new("Welcome").unwrap(),
            PopupMessage::new("Hello").unwrap(),
            true,
            vec![],
            Some(date("2026-05-10")),
            Some(date("2026-05-01")),
        );
        assert!(matches!(result, Err(TypeConstraintError::InvalidValue(_))));
    }

    #[test]
    fn accepts_open_ended_window() {
        let popup = NewPopup::try_new(
            PopupTitle::new("Welcome").unwrap(),
            PopupMessage::new("Hello").unwrap(),
            false,
            vec![HospitalId::new(2).unwrap()],
            Some(date("2026-05-10")),
            None,
        )
        .unwrap();
        let json = serde_json::to_value(&popup).unwrap();
        assert_eq!(json["hospitalIds"], serde_json::json!([2]));
        assert_eq!(json["startsOn"], "2026-05-10");
    }
}
