use actix_multipart::form::MultipartForm;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::backend::HttpBackend;
use crate::forms::hospitals::{AddHospitalForm, UploadHospitalsForm};
use crate::models::auth::AuthenticatedUser;
use crate::routes::redirect;
use crate::services::{ServiceError, hospitals as hospitals_service};

#[post("/hospitals/add")]
pub async fn add_hospital(
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<AddHospitalForm>,
) -> impl Responder {
    match hospitals_service::add_hospital(backend.get_ref(), &user, form).await {
        Ok(()) => {
            FlashMessage::success("Hospital added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(_) => {
            FlashMessage::error("Could not add the hospital.").send();
        }
    }
    redirect("/hospitals")
}

#[post("/hospitals/upload")]
pub async fn upload_hospitals(
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
    MultipartForm(form): MultipartForm<UploadHospitalsForm>,
) -> impl Responder {
    let file = match form.csv.file.reopen() {
        Ok(file) => file,
        Err(err) => {
            log::error!("Failed to read uploaded hospitals: {err}");
            FlashMessage::error("Could not read the uploaded file.").send();
            return redirect("/hospitals");
        }
    };

    match hospitals_service::upload_hospitals(backend.get_ref(), &user, file).await {
        Ok(created) => {
            FlashMessage::success(format!("{created} hospitals added.")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(_) => {
            FlashMessage::error("Could not upload hospitals.").send();
        }
    }
    redirect("/hospitals")
}
