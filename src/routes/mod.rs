//! HTTP handlers. Each handler calls one service and turns its outcome into a
//! rendered page, a redirect with a flash message, or a status code.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::resources::Resource;

pub mod api;
pub mod courses;
pub mod hospitals;
pub mod list;
pub mod main;
pub mod popups;

/// Maps a flash message level to the alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

#[derive(Debug, Serialize)]
struct NavEntry {
    slug: &'static str,
    title: &'static str,
    href: String,
}

/// Lists the user is allowed to open, in menu order.
fn navigation(user: &AuthenticatedUser) -> Vec<NavEntry> {
    Resource::ALL
        .into_iter()
        .filter(|resource| user.has_role(resource.required_role()))
        .map(|resource| NavEntry {
            slug: resource.slug(),
            title: resource.title(),
            href: resource.path(),
        })
        .collect()
}

/// Context shared by every page: alerts, user, menu and the auth home link.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
    home_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context.insert("nav", &navigation(user));
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
