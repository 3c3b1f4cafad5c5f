use std::collections::BTreeMap;

use futures::future::join_all;

use crate::SERVICE_ADMIN_ROLE;
use crate::backend::{ListSource, LookupSource};
use crate::dto::list::{LIST_LOAD_FAILED, ListOutcome, ListPageData};
use crate::list::controller::ListController;
use crate::list::filter::OptionsState;
use crate::list::meta::Page;
use crate::list::query::ListQueryState;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ListSettings;
use crate::resources::{FilterSource, Resource, ResourceFilter};
use crate::services::{ServiceError, ServiceResult};

/// Builds the controller for `resource` with the state found in `raw_query`.
pub fn controller_for(
    resource: Resource,
    raw_query: &str,
    settings: &ListSettings,
) -> ListController {
    let mut controller = ListController::new(
        resource.path(),
        ListQueryState::new(settings.page_sizes.default_size()),
        resource.columns(),
        &resource.filter_defs(),
        settings.page_sizes.clone(),
        settings.debounce,
    );
    controller.sync_query(raw_query);
    controller
}

async fn load_options<B>(backend: &B, filter: &ResourceFilter) -> OptionsState
where
    B: LookupSource + ?Sized,
{
    match filter.source {
        FilterSource::Static(_) => OptionsState::Ready(filter.static_options().unwrap_or_default()),
        FilterSource::Lookup(kind) => match backend.lookup_options(kind).await {
            Ok(options) => OptionsState::Ready(options),
            Err(err) => {
                log::warn!("Failed to load {kind} options: {err}");
                OptionsState::Failed(err.to_string())
            }
        },
    }
}

/// Loads one list page: the rows for the URL state and every filter's options,
/// fetched concurrently. Lookup failures only affect their popover; a failed
/// row fetch renders an empty table with an error notice.
pub async fn load_list_page<B>(
    backend: &B,
    user: &AuthenticatedUser,
    resource: Resource,
    raw_query: &str,
    settings: &ListSettings,
) -> ServiceResult<ListOutcome>
where
    B: ListSource + LookupSource + ?Sized,
{
    if !user.has_role(resource.required_role()) {
        return Err(ServiceError::Unauthorized);
    }

    let controller = controller_for(resource, raw_query, settings);
    let state = controller.state().clone();

    let lookups = join_all(
        resource
            .filters()
            .iter()
            .map(|filter| load_options(backend, filter)),
    );
    let (page, options) = futures::join!(backend.fetch_page(resource, &state), lookups);

    let (page, load_error) = match page {
        Ok(page) => (page, None),
        Err(err) => {
            log::error!("Failed to load {}: {err}", resource.slug());
            (Page::empty(state.per_page), Some(LIST_LOAD_FAILED))
        }
    };

    if let Some(navigation) = controller.out_of_range(&page.meta) {
        log::info!(
            "Page {} of {} is out of range, redirecting",
            state.page,
            resource.slug()
        );
        return Ok(ListOutcome::Redirect(navigation.href));
    }

    let options: BTreeMap<&str, OptionsState> = resource
        .filters()
        .iter()
        .map(|filter| filter.def.key)
        .zip(options)
        .collect();

    let view = controller.view(&page.data, &page.meta, &options);
    let mut data = ListPageData::new(resource, view, user.has_role(SERVICE_ADMIN_ROLE));
    data.load_error = load_error;

    Ok(ListOutcome::Render(Box::new(data)))
}
