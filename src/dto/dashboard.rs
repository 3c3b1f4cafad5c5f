use serde::Serialize;

/// One summary card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub label: &'static str,
    pub value: String,
    /// Secondary line under the value.
    pub hint: Option<String>,
    /// List page the card links to, if the user may open it.
    pub href: Option<String>,
}

/// Data required to render `main/index.html`.
#[derive(Debug, Default, Serialize)]
pub struct DashboardPageData {
    pub cards: Vec<DashboardCard>,
    /// Set when the summary could not be fetched.
    pub load_error: Option<&'static str>,
}
