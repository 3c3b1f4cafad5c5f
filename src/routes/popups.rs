use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::backend::HttpBackend;
use crate::forms::popups::AddPopupForm;
use crate::models::auth::AuthenticatedUser;
use crate::routes::redirect;
use crate::services::{ServiceError, popups as popups_service};

/// `hospital_ids` repeats in the body, which `web::Form` cannot decode.
#[post("/popups/add")]
pub async fn add_popup(
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
    body: web::Bytes,
) -> impl Responder {
    let form: AddPopupForm = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse pop-up form: {err}");
            FlashMessage::error("Invalid pop-up form.").send();
            return redirect("/popups");
        }
    };

    match popups_service::add_popup(backend.get_ref(), &user, form).await {
        Ok(popup) => {
            FlashMessage::success(format!("Pop-up \"{}\" added.", popup.title)).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(_) => {
            FlashMessage::error("Could not add the pop-up.").send();
        }
    }
    redirect("/popups")
}

#[post("/popups/{popup_id}/toggle")]
pub async fn toggle_popup(
    popup_id: web::Path<i32>,
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
) -> impl Responder {
    match popups_service::toggle_popup(backend.get_ref(), &user, popup_id.into_inner()).await {
        Ok(popup) if popup.active => {
            FlashMessage::success(format!("Pop-up \"{}\" is now shown.", popup.title)).send();
        }
        Ok(popup) => {
            FlashMessage::success(format!("Pop-up \"{}\" is now hidden.", popup.title)).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) | Err(ServiceError::TypeConstraint(_)) => {
            FlashMessage::warning("The pop-up no longer exists.").send();
        }
        Err(_) => {
            FlashMessage::error("Could not change the pop-up.").send();
        }
    }
    redirect("/popups")
}
