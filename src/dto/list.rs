use serde::Serialize;

use crate::list::controller::ListView;
use crate::resources::Resource;

/// Shown above the table when the rows could not be fetched.
pub const LIST_LOAD_FAILED: &str = "Could not load records. Try again later.";

/// Data required to render `list/index.html`.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    pub slug: &'static str,
    pub title: &'static str,
    pub list: ListView,
    /// Set when the rows could not be fetched; the page still renders.
    pub load_error: Option<&'static str>,
    /// Whether the add forms are offered.
    pub can_edit: bool,
    /// Whether rows get a delete action.
    pub can_delete: bool,
}

impl ListPageData {
    pub fn new(resource: Resource, list: ListView, can_edit: bool) -> Self {
        Self {
            slug: resource.slug(),
            title: resource.title(),
            list,
            load_error: None,
            can_edit,
            can_delete: can_edit && resource.deletable(),
        }
    }
}

/// Result of loading a list page.
#[derive(Debug)]
pub enum ListOutcome {
    Render(Box<ListPageData>),
    /// The requested page lies past the end; go to this href instead.
    Redirect(String),
}
