//! Admin dashboard for the education platform: URL-driven list pages over the
//! backend REST API plus the forms that manage courses, hospitals and pop-ups.
//!
//! With only the `data` feature the crate exposes the domain types and the
//! list controller ([`list`]), which have no HTTP dependencies.

pub mod domain;
pub mod list;
pub mod resources;

#[cfg(feature = "server")]
pub mod backend;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

pub const SERVICE_ACCESS_ROLE: &str = "dashboard";
pub const SERVICE_ADMIN_ROLE: &str = "dashboard_admin";

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_identity::IdentityMiddleware;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::backend::HttpBackend;
    use crate::middleware::RedirectUnauthorized;
    use crate::models::config::ServerConfig;
    use crate::routes::api::api_v1_lookups;
    use crate::routes::courses::{add_course, edit_course, save_course};
    use crate::routes::hospitals::{add_hospital, upload_hospitals};
    use crate::routes::list::{delete_record, show_list};
    use crate::routes::main::{logout, not_assigned, show_index};
    use crate::routes::popups::{add_popup, toggle_popup};

    /// Registers every route. `show_list` matches any single segment, so it
    /// goes last.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(not_assigned)
            .service(web::scope("/api").service(api_v1_lookups))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(logout)
                    .service(add_course)
                    .service(edit_course)
                    .service(save_course)
                    .service(add_hospital)
                    .service(upload_hospitals)
                    .service(add_popup)
                    .service(toggle_popup)
                    .service(delete_record)
                    .service(show_list),
            );
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let backend = HttpBackend::new(
            server_config.backend_url.clone(),
            server_config.backend_api_key.clone(),
            server_config.backend_timeout(),
        )
        .map_err(|e| std::io::Error::other(format!("Failed to create backend client: {e}")))?;

        // Keys and stores for identity, sessions, and flash messages.
        let secret_key = Key::from(server_config.secret.as_bytes());

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving the dashboard on {}:{} against {}",
            bind_address.0,
            bind_address.1,
            server_config.backend_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .cookie_domain(Some(format!(".{}", server_config.domain)))
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(backend.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
