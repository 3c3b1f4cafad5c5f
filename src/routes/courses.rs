use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::forms::courses::CourseForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, courses as courses_service};

#[post("/courses/add")]
pub async fn add_course(
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<CourseForm>,
) -> impl Responder {
    match courses_service::add_course(backend.get_ref(), &user, form).await {
        Ok(course) => {
            FlashMessage::success(format!("Course \"{}\" added.", course.title)).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(_) => {
            FlashMessage::error("Could not add the course.").send();
        }
    }
    redirect("/courses")
}

#[get("/courses/{course_id}/edit")]
pub async fn edit_course(
    course_id: web::Path<i32>,
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let course_id = course_id.into_inner();

    match courses_service::load_course_edit(backend.get_ref(), &user, course_id).await {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "courses",
                &server_config.auth_service_url,
            );
            context.insert("course", &data.course);
            context.insert("form", &CourseForm::from_course(&data.course));
            context.insert("categories", &data.categories);
            context.insert("languages", &data.languages);

            render_template(&tera, "courses/edit.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) | Err(ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Course not found.").send();
            redirect("/courses")
        }
        Err(err) => {
            log::error!("Failed to show course {course_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/courses/{course_id}/save")]
pub async fn save_course(
    course_id: web::Path<i32>,
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<CourseForm>,
) -> impl Responder {
    let course_id = course_id.into_inner();
    let edit_url = format!("/courses/{course_id}/edit");

    match courses_service::save_course(backend.get_ref(), &user, course_id, form).await {
        Ok(_) => {
            FlashMessage::success("Course saved.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Course not found.").send();
            return redirect("/courses");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(_) => {
            FlashMessage::error("Could not save the course.").send();
        }
    }
    redirect(&edit_url)
}
