use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::dto::list::ListOutcome;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::resources::Resource;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, list as list_service, records as records_service};

/// Any registered list page. The query string is the whole list state.
#[get("/{slug}")]
pub async fn show_list(
    slug: web::Path<String>,
    req: HttpRequest,
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(resource) = Resource::from_slug(&slug) else {
        return HttpResponse::NotFound().finish();
    };

    let settings = server_config.list_settings();
    match list_service::load_list_page(
        backend.get_ref(),
        &user,
        resource,
        req.query_string(),
        &settings,
    )
    .await
    {
        Ok(ListOutcome::Render(data)) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                resource.slug(),
                &server_config.auth_service_url,
            );
            context.insert("list", &data.list);
            context.insert("page", &data);

            render_template(&tera, "list/index.html", &context)
        }
        Ok(ListOutcome::Redirect(href)) => redirect(&href),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to show {}: {err}", resource.slug());
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/{slug}/{id}/delete")]
pub async fn delete_record(
    path: web::Path<(String, i32)>,
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
) -> impl Responder {
    let (slug, id) = path.into_inner();
    let back = format!("/{slug}");

    match records_service::delete_record(backend.get_ref(), &user, &slug, id).await {
        Ok(resource) => {
            FlashMessage::success(format!("Removed from {}.", resource.title())).send();
            redirect(&resource.path())
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::warning("The record no longer exists.").send();
            redirect(&back)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&back)
        }
        Err(err) => {
            log::error!("Failed to delete {slug} {id}: {err}");
            FlashMessage::error("Could not delete the record.").send();
            redirect(&back)
        }
    }
}
