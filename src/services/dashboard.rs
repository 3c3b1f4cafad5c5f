use crate::SERVICE_ACCESS_ROLE;
use crate::backend::AnalyticsReader;
use crate::domain::analytics::DashboardStats;
use crate::dto::dashboard::{DashboardCard, DashboardPageData};
use crate::list::query::{ListQueryPatch, ListQueryState, build_url};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ListSettings;
use crate::resources::Resource;
use crate::services::{ServiceError, ServiceResult};

pub const STATS_LOAD_FAILED: &str = "Could not load the summary. Try again later.";

fn card(
    user: &AuthenticatedUser,
    label: &'static str,
    value: impl ToString,
    resource: Resource,
) -> DashboardCard {
    DashboardCard {
        label,
        value: value.to_string(),
        hint: None,
        href: user
            .has_role(resource.required_role())
            .then(|| resource.path()),
    }
}

/// Turns the backend summary into cards, linking only to lists the user may
/// open.
pub fn build_cards(
    user: &AuthenticatedUser,
    stats: &DashboardStats,
    per_page: usize,
) -> Vec<DashboardCard> {
    let mut users = card(user, "Users", stats.users, Resource::Users);
    users.hint = Some(format!("+{} in the last 30 days", stats.new_users_last_30_days));

    let mut popups = card(user, "Active pop-ups", stats.active_popups, Resource::Popups);
    if popups.href.is_some() {
        popups.href = Some(build_url(
            &Resource::Popups.path(),
            &ListQueryState::new(per_page),
            &ListQueryPatch::new().filter("active", "true"),
        ));
    }

    vec![
        card(user, "Courses", stats.courses, Resource::Courses),
        card(user, "Chapters", stats.chapters, Resource::Chapters),
        card(user, "Stories", stats.stories, Resource::Stories),
        card(user, "Music", stats.music, Resource::Music),
        card(user, "Games", stats.games, Resource::Games),
        users,
        card(user, "Hospitals", stats.hospitals, Resource::Hospitals),
        popups,
        card(user, "Revenue", stats.revenue.display(), Resource::Payments),
    ]
}

/// Loads the analytics cards of the home page. A backend failure still renders
/// the page with a notice.
pub async fn load_dashboard<B>(
    backend: &B,
    user: &AuthenticatedUser,
    settings: &ListSettings,
) -> ServiceResult<DashboardPageData>
where
    B: AnalyticsReader + ?Sized,
{
    if !user.has_role(SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    match backend.dashboard_stats().await {
        Ok(stats) => Ok(DashboardPageData {
            cards: build_cards(user, &stats, settings.page_sizes.default_size()),
            load_error: None,
        }),
        Err(err) => {
            log::error!("Failed to load dashboard stats: {err}");
            Ok(DashboardPageData {
                cards: Vec::new(),
                load_error: Some(STATS_LOAD_FAILED),
            })
        }
    }
}
