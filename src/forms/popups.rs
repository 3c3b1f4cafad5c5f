use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::popup::NewPopup;
use crate::domain::types::{HospitalId, PopupMessage, PopupTitle};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating a pop-up. `hospital_ids` may repeat, so the body is
/// parsed with `serde_html_form`.
pub struct AddPopupForm {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub hospital_ids: Vec<i32>,
    #[serde(default)]
    pub starts_on: String,
    #[serde(default)]
    pub ends_on: String,
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, FormError> {
    match value.trim() {
        "" => Ok(None),
        value => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| FormError::InvalidDate(value.to_string())),
    }
}

impl TryFrom<AddPopupForm> for NewPopup {
    type Error = FormError;

    fn try_from(form: AddPopupForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let title = PopupTitle::new(form.title).map_err(|_| FormError::InvalidTitle)?;
        let message = PopupMessage::new(form.message).map_err(|_| FormError::InvalidMessage)?;
        let mut hospital_ids = form
            .hospital_ids
            .into_iter()
            .map(|id| HospitalId::new(id).map_err(|_| FormError::InvalidHospitalId))
            .collect::<Result<Vec<_>, _>>()?;
        hospital_ids.sort_unstable_by_key(|id| id.get());
        hospital_ids.dedup();

        let starts_on = parse_date(&form.starts_on)?;
        let ends_on = parse_date(&form.ends_on)?;

        Ok(NewPopup::try_new(
            title,
            message,
            form.active,
            hospital_ids,
            starts_on,
            ends_on,
        )?)
    }
}
