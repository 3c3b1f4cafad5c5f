use actix_web::{HttpResponse, Responder, get, web};

use crate::backend::HttpBackend;
use crate::models::auth::AuthenticatedUser;
use crate::services::{ServiceError, lookups as lookups_service};

/// Options of one lookup table as `[{"value": .., "label": ..}]`.
#[get("/v1/lookups/{kind}")]
pub async fn api_v1_lookups(
    kind: web::Path<String>,
    user: AuthenticatedUser,
    backend: web::Data<HttpBackend>,
) -> impl Responder {
    match lookups_service::lookup_options(backend.get_ref(), &user, &kind).await {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to serve {kind} lookup: {err}");
            HttpResponse::BadGateway().finish()
        }
    }
}
