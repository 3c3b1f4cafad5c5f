//! Single-select filter popovers, each bound to one URL parameter.

use serde::{Deserialize, Serialize};

use crate::list::query::{ListQueryPatch, ListQueryState, build_url};

pub const OPTIONS_LOADING: &str = "Loading…";
pub const OPTIONS_EMPTY: &str = "No options available";
pub const OPTIONS_FAILED: &str = "Could not load options";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options of one filter as seen by the popover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionsState {
    Loading,
    Ready(Vec<FilterOption>),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterDef {
    /// URL parameter name, used unprefixed.
    pub key: &'static str,
    pub label: &'static str,
}

impl FilterDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterPopoverView {
    pub key: &'static str,
    pub label: &'static str,
    pub open: bool,
    pub active_value: Option<String>,
    /// Label of the active option, or the raw value when options are unknown.
    pub active_label: Option<String>,
    pub options: Vec<OptionView>,
    pub clear_href: Option<String>,
    pub message: Option<&'static str>,
}

impl FilterPopoverView {
    pub fn new(
        path: &str,
        state: &ListQueryState,
        filter: &FilterDef,
        options: &OptionsState,
        open: bool,
    ) -> Self {
        let active_value = state.filter(filter.key).map(str::to_string);

        let (options, message) = match options {
            OptionsState::Loading => (Vec::new(), Some(OPTIONS_LOADING)),
            OptionsState::Failed(_) => (Vec::new(), Some(OPTIONS_FAILED)),
            OptionsState::Ready(options) if options.is_empty() => (Vec::new(), Some(OPTIONS_EMPTY)),
            OptionsState::Ready(options) => (
                options
                    .iter()
                    .map(|option| OptionView {
                        value: option.value.clone(),
                        label: option.label.clone(),
                        selected: active_value.as_deref() == Some(option.value.as_str()),
                        href: build_url(
                            path,
                            state,
                            &ListQueryPatch::new().filter(filter.key, option.value.as_str()),
                        ),
                    })
                    .collect::<Vec<_>>(),
                None,
            ),
        };

        let active_label = active_value.as_ref().map(|value| {
            options
                .iter()
                .find(|option| option.value == *value)
                .map(|option| option.label.clone())
                .unwrap_or_else(|| value.clone())
        });

        let clear_href = active_value
            .is_some()
            .then(|| build_url(path, state, &ListQueryPatch::new().clear_filter(filter.key)));

        Self {
            key: filter.key,
            label: filter.label,
            open,
            active_value,
            active_label,
            options,
            clear_href,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::query::PageSizes;

    const CATEGORY: FilterDef = FilterDef::new("category", "Category");

    fn options() -> OptionsState {
        OptionsState::Ready(vec![
            FilterOption::new("science", "Science"),
            FilterOption::new("art", "Art"),
        ])
    }

    #[test]
    fn options_link_to_filtered_first_page() {
        let state = ListQueryState::from_query(
            "page=4&language=en",
            &["category", "language"],
            &PageSizes::default(),
        );
        let view = FilterPopoverView::new("/stories", &state, &CATEGORY, &options(), true);
        assert_eq!(
            view.options[0].href,
            "/stories?page=1&perPage=10&category=science&language=en"
        );
        assert!(view.open);
        assert_eq!(view.clear_href, None);
        assert_eq!(view.message, None);
    }

    #[test]
    fn active_value_is_selected_and_clearable() {
        let state = ListQueryState::from_query(
            "category=art&language=en",
            &["category", "language"],
            &PageSizes::default(),
        );
        let view = FilterPopoverView::new("/stories", &state, &CATEGORY, &options(), false);
        assert_eq!(view.active_label.as_deref(), Some("Art"));
        assert!(view.options[1].selected);
        assert!(!view.options[0].selected);
        assert_eq!(
            view.clear_href.as_deref(),
            Some("/stories?page=1&perPage=10&language=en")
        );
    }

    #[test]
    fn lookup_states_show_inline_messages() {
        let state = ListQueryState::from_query("category=art", &["category"], &PageSizes::default());

        let loading = FilterPopoverView::new("/s", &state, &CATEGORY, &OptionsState::Loading, true);
        assert_eq!(loading.message, Some(OPTIONS_LOADING));

        let failed = FilterPopoverView::new(
            "/s",
            &state,
            &CATEGORY,
            &OptionsState::Failed("timeout".to_string()),
            true,
        );
        assert_eq!(failed.message, Some(OPTIONS_FAILED));
        assert!(failed.options.is_empty());
        assert_eq!(failed.active_label.as_deref(), Some("art"));
        assert!(failed.clear_href.is_some());

        let empty = FilterPopoverView::new(
            "/s",
            &state,
            &CATEGORY,
            &OptionsState::Ready(Vec::new()),
            true,
        );
        assert_eq!(empty.message, Some(OPTIONS_EMPTY));
    }
}
