//! URL-synchronized paginated list controller.
//!
//! The controller never fetches. It reads the query state from the URL,
//! turns user intents into [`Navigation`]s and builds a [`ListView`] from rows
//! and metadata fetched by the caller for the current state.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::list::filter::{FilterDef, FilterPopoverView, OptionsState};
use crate::list::meta::PageMeta;
use crate::list::pagination::PaginationControls;
use crate::list::query::{
    ListQueryPatch, ListQueryState, PARAM_PAGE, PARAM_SEARCH, PageSizes, build_url,
};
use crate::list::search::DebouncedSearch;
use crate::list::table::{ColumnDef, SortChange, TableRow, TableView, toggle_sort};

/// A request to move to `href` (same path, new query string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub href: String,
}

impl Navigation {
    /// The query string part of the href, without `?`.
    pub fn query(&self) -> &str {
        self.href
            .split_once('?')
            .map(|(_, query)| query)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchView {
    pub param: &'static str,
    pub value: String,
    /// Parameters to resubmit with the search form; page is left out so a new
    /// search starts on the first page.
    pub hidden: Vec<(String, String)>,
    pub debounce_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub path: String,
    pub state: ListQueryState,
    pub search: SearchView,
    pub filters: Vec<FilterPopoverView>,
    pub table: TableView,
    pub pagination: PaginationControls,
    /// Clears search and all filters; present only when any is active.
    pub reset_href: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ListController {
    path: String,
    state: ListQueryState,
    columns: Vec<ColumnDef>,
    filters: Vec<FilterDef>,
    page_sizes: PageSizes,
    search: DebouncedSearch,
    open_filter: Option<&'static str>,
}

impl ListController {
    pub fn new(
        path: impl Into<String>,
        state: ListQueryState,
        columns: &[ColumnDef],
        filters: &[FilterDef],
        page_sizes: PageSizes,
        debounce: Duration,
    ) -> Self {
        let search = DebouncedSearch::new(&state.search, debounce);
        Self {
            path: path.into(),
            state,
            columns: columns.to_vec(),
            filters: filters.to_vec(),
            page_sizes,
            search,
            open_filter: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The latest URL state, including navigations issued by this controller.
    pub fn state(&self) -> &ListQueryState {
        &self.state
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    pub fn open_filter(&self) -> Option<&str> {
        self.open_filter
    }

    /// Follows a URL change from any source.
    pub fn sync_url(&mut self, state: ListQueryState) {
        self.search.sync_from_url(&state.search);
        self.state = state;
    }

    /// Derives the state from a raw query string and follows it.
    pub fn sync_query(&mut self, query: &str) {
        let keys = self.filter_keys();
        let sortable = self.sortable_columns();
        let state =
            ListQueryState::from_query(query, &keys, &self.page_sizes).restrict_sort(&sortable);
        self.sync_url(state);
    }

    /// Whether data fetched for `fetched_for` still matches the latest state.
    /// Results for an older state must be discarded.
    pub fn accepts(&self, fetched_for: &ListQueryState) -> bool {
        *fetched_for == self.state
    }

    pub fn on_search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.search.input(text, now);
    }

    /// Drives the search debounce timer.
    pub fn tick(&mut self, now: Instant) -> Option<Navigation> {
        let committed = self.search.poll(now, &self.state.search)?;
        Some(self.navigate(ListQueryPatch::new().search(committed)))
    }

    pub fn toggle_filter(&mut self, key: &str) {
        self.open_filter = match self.open_filter {
            Some(open) if open == key => None,
            _ => self
                .filters
                .iter()
                .find(|filter| filter.key == key)
                .map(|filter| filter.key),
        };
    }

    pub fn close_filters(&mut self) {
        self.open_filter = None;
    }

    /// Selecting an option navigates right away and closes the popover.
    pub fn select_filter(&mut self, key: &str, value: &str) -> Navigation {
        self.open_filter = None;
        self.navigate(ListQueryPatch::new().filter(key, value))
    }

    pub fn clear_filter(&mut self, key: &str) -> Navigation {
        self.open_filter = None;
        self.navigate(ListQueryPatch::new().clear_filter(key))
    }

    pub fn on_sort_change(&mut self, change: SortChange) -> Navigation {
        self.navigate(ListQueryPatch::new().set_sort(change.into_sort()))
    }

    /// Header click on `column`; `None` when the column cannot be sorted.
    pub fn toggle_sort(&mut self, column: &str) -> Option<Navigation> {
        let sortable = self
            .columns
            .iter()
            .any(|def| def.id == column && def.sortable);
        if !sortable {
            return None;
        }
        let change = toggle_sort(self.state.sort.as_ref(), column);
        Some(self.on_sort_change(change))
    }

    pub fn go_to_page(&mut self, page: usize) -> Navigation {
        self.navigate(ListQueryPatch::new().page(page.max(1)))
    }

    /// Page-size selector; sizes outside the allowed set are ignored.
    pub fn on_page_size(&mut self, size: usize) -> Option<Navigation> {
        if !self.page_sizes.contains(size) {
            return None;
        }
        Some(self.navigate(ListQueryPatch::new().per_page(size)))
    }

    /// Redirect to the last page when the URL points past the end of a
    /// non-empty result.
    pub fn out_of_range(&self, meta: &PageMeta) -> Option<Navigation> {
        meta.is_past_end(self.state.page).then(|| Navigation {
            href: build_url(
                &self.path,
                &self.state,
                &ListQueryPatch::new().page(meta.total_pages()),
            ),
        })
    }

    /// Cancels the pending search commit and closes popovers.
    pub fn unmount(&mut self) {
        self.search.cancel();
        self.open_filter = None;
    }

    pub fn view<T: TableRow>(
        &self,
        data: &[T],
        meta: &PageMeta,
        options: &BTreeMap<&str, OptionsState>,
    ) -> ListView {
        let filters = self
            .filters
            .iter()
            .map(|filter| {
                let state = options.get(filter.key).unwrap_or(&OptionsState::Loading);
                FilterPopoverView::new(
                    &self.path,
                    &self.state,
                    filter,
                    state,
                    self.open_filter == Some(filter.key),
                )
            })
            .collect();

        let hidden = self
            .state
            .params()
            .into_iter()
            .filter(|(key, _)| *key != PARAM_PAGE && *key != PARAM_SEARCH)
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        let reset_href = self.state.is_narrowed().then(|| {
            let patch = self
                .state
                .filters
                .keys()
                .fold(ListQueryPatch::new().search(""), |patch, key| {
                    patch.clear_filter(key.as_str())
                });
            build_url(&self.path, &self.state, &patch)
        });

        ListView {
            path: self.path.clone(),
            state: self.state.clone(),
            search: SearchView {
                param: PARAM_SEARCH,
                value: self.search.text().to_string(),
                hidden,
                debounce_ms: u64::try_from(self.search.delay().as_millis()).unwrap_or(u64::MAX),
            },
            filters,
            table: TableView::new(&self.path, &self.state, &self.columns, data),
            pagination: PaginationControls::new(&self.path, &self.state, meta, &self.page_sizes),
            reset_href,
        }
    }

    fn navigate(&mut self, patch: ListQueryPatch) -> Navigation {
        let next = self.state.apply(&patch);
        let href = format!("{}?{}", self.path, next.to_query_string());
        self.sync_url(next);
        Navigation { href }
    }

    fn filter_keys(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.key).collect()
    }

    fn sortable_columns(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|column| column.sortable)
            .map(|column| column.id)
            .collect()
    }
}
