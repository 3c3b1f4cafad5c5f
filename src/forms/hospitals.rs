use std::io::Read;

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::hospital::NewHospital;
use crate::domain::types::{CityName, HospitalName, PhoneNumber};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding a single hospital.
pub struct AddHospitalForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

fn build_hospital(
    name: String,
    city: String,
    phone: &str,
    address: String,
) -> Result<NewHospital, FormError> {
    let name = HospitalName::new(name).map_err(|_| FormError::InvalidName)?;
    let city = CityName::new(city).map_err(|_| FormError::InvalidCity)?;
    let phone = match phone.trim() {
        "" => None,
        phone => Some(PhoneNumber::new(phone).map_err(|_| FormError::InvalidPhoneNumber)?),
    };
    Ok(NewHospital::new(name, city, phone, Some(address)))
}

impl TryFrom<AddHospitalForm> for NewHospital {
    type Error = FormError;

    fn try_from(form: AddHospitalForm) -> Result<Self, Self::Error> {
        form.validate()?;
        build_hospital(form.name, form.city, &form.phone, form.address)
    }
}

#[derive(Debug, Deserialize)]
struct HospitalCsvRow {
    name: String,
    city: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
}

/// Parses `name,city,phone,address` rows. The first invalid row rejects the
/// whole file.
pub fn parse_hospitals_csv<R: Read>(reader: R) -> Result<Vec<NewHospital>, FormError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let csv_error = |err: csv::Error| FormError::Csv {
        line: err.position().map(|p| p.line()).unwrap_or_default(),
        message: err.to_string(),
    };

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let mut hospitals = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: HospitalCsvRow = record.deserialize(Some(&headers)).map_err(csv_error)?;
        let hospital = build_hospital(row.name, row.city, &row.phone, row.address).map_err(
            |err| FormError::Csv {
                line,
                message: err.to_string(),
            },
        )?;
        hospitals.push(hospital);
    }
    Ok(hospitals)
}

#[derive(MultipartForm)]
/// Multipart form for the bulk hospital upload.
pub struct UploadHospitalsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}
