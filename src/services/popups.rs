use crate::SERVICE_ADMIN_ROLE;
use crate::backend::{PopupReader, PopupWriter};
use crate::domain::popup::{NewPopup, Popup};
use crate::domain::types::PopupId;
use crate::forms::popups::AddPopupForm;
use crate::models::auth::AuthenticatedUser;
use crate::services::{ServiceError, ServiceResult};

/// Validates the form, sanitizes the message and creates the pop-up.
pub async fn add_popup<B>(
    backend: &B,
    user: &AuthenticatedUser,
    form: AddPopupForm,
) -> ServiceResult<Popup>
where
    B: PopupWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let popup = NewPopup::try_from(form).map_err(|err| {
        log::error!("Failed to validate pop-up form: {err}");
        ServiceError::from(err)
    })?;

    backend.create_popup(&popup).await.map_err(|err| {
        log::error!("Failed to add a pop-up: {err}");
        ServiceError::from(err)
    })
}

/// Flips the active flag of pop-up `id`.
pub async fn toggle_popup<B>(
    backend: &B,
    user: &AuthenticatedUser,
    id: i32,
) -> ServiceResult<Popup>
where
    B: PopupReader + PopupWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let id = PopupId::new(id)?;
    let popup = backend
        .get_popup(id)
        .await
        .map_err(|err| {
            log::error!("Failed to load pop-up {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    backend
        .set_popup_active(id, !popup.active)
        .await
        .map_err(|err| {
            log::error!("Failed to toggle pop-up {id}: {err}");
            ServiceError::from(err)
        })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
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

    fn popup(id: PopupId, active: bool) -> Popup {
        Popup {
            id,
            title: "Welcome".to_string(),
            message: "Hello".to_string(),
            active,
            hospital_ids: Vec::new(),
            starts_on: None,
            ends_on: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn toggle_flips_current_state() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_popup()
            .returning(|id| Ok(Some(popup(id, true))));
        backend
            .expect_set_popup_active()
            .withf(|id, active| id.get() == 5 && !*active)
            .returning(|id, active| Ok(popup(id, active)));

        let toggled = block_on(toggle_popup(&backend, &admin(), 5)).unwrap();
        assert!(!toggled.active);
    }

    #[test]
    fn toggle_of_missing_popup_is_not_found() {
        let mut backend = MockBackend::new();
        backend.expect_get_popup().returning(|_| Ok(None));
        assert!(matches!(
            block_on(toggle_popup(&backend, &admin(), 5)),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn add_sends_sanitized_message() {
        let mut backend = MockBackend::new();
        backend
            .expect_create_popup()
            .withf(|popup| popup.message.as_str() == "<b>Hi</b>")
            .returning(|new| {
                let mut created = popup(PopupId::new(1).unwrap(), new.active);
                created.message = new.message.as_str().to_string();
                Ok(created)
            });

        let form = AddPopupForm {
            title: "Welcome".to_string(),
            message: "<b onclick=\"x()\">Hi</b>".to_string(),
            ..AddPopupForm::default()
        };
        let created = block_on(add_popup(&backend, &admin(), form)).unwrap();
        assert_eq!(created.message, "<b>Hi</b>");
    }
}
