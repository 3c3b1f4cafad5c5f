use std::io::Read;

use crate::SERVICE_ADMIN_ROLE;
use crate::backend::HospitalWriter;
use crate::domain::hospital::NewHospital;
use crate::forms::hospitals::{AddHospitalForm, parse_hospitals_csv};
use crate::models::auth::AuthenticatedUser;
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-hospital form and stores the hospital.
pub async fn add_hospital<B>(
    backend: &B,
    user: &AuthenticatedUser,
    form: AddHospitalForm,
) -> ServiceResult<()>
where
    B: HospitalWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let hospital = NewHospital::try_from(form).map_err(|err| {
        log::error!("Failed to validate hospital form: {err}");
        ServiceError::from(err)
    })?;

    backend.create_hospitals(&[hospital]).await.map_err(|err| {
        log::error!("Failed to add a hospital: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Parses an uploaded CSV file and creates the hospitals in bulk. Returns how
/// many were created.
pub async fn upload_hospitals<B, R>(
    backend: &B,
    user: &AuthenticatedUser,
    csv: R,
) -> ServiceResult<usize>
where
    B: HospitalWriter + ?Sized,
    R: Read,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let hospitals = parse_hospitals_csv(csv).map_err(|err| {
        log::error!("Failed to parse hospitals: {err}");
        ServiceError::from(err)
    })?;

    if hospitals.is_empty() {
        return Err(ServiceError::Form("The file has no hospitals".to_string()));
    }

    backend.create_hospitals(&hospitals).await.map_err(|err| {
        log::error!("Failed to add hospitals: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::backend::mock::MockBackend;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec!["dashboard".to_string(), "dashboard_admin".to_string()],
            exp: usize::MAX,
        }
    }

    #[test]
    fn upload_creates_all_rows() {
        let mut backend = MockBackend::new();
        backend
            .expect_create_hospitals()
            .withf(|hospitals| hospitals.len() == 2)
            .returning(|hospitals| Ok(hospitals.len()));

        let csv = "name,city,phone,address\nA,Boston,,\nB,Denver,,\n";
        let created = block_on(upload_hospitals(&backend, &admin(), csv.as_bytes())).unwrap();
        assert_eq!(created, 2);
    }

    #[test]
    fn header_only_file_is_rejected() {
        let backend = MockBackend::new();
        let result = block_on(upload_hospitals(
            &backend,
            &admin(),
            "name,city,phone,address\n".as_bytes(),
        ));
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn invalid_form_is_reported() {
        let backend = MockBackend::new();
        let form = AddHospitalForm {
            name: "Clinic".to_string(),
            city: String::new(),
            ..AddHospitalForm::default()
        };
        let result = block_on(add_hospital(&backend, &admin(), form));
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
