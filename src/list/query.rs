//! List query state carried in the page URL.
//!
//! The URL is the only place where page, page size, search, sort and filter
//! values live. [`ListQueryState::from_query`] derives the state from a raw
//! query string and [`build_url`] is the single writer: it applies a
//! [`ListQueryPatch`] to a state and returns the href to navigate to.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_PER_PAGE: &str = "perPage";
/// Accepted on read as an alias of [`PARAM_PER_PAGE`].
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_SEARCH: &str = "search";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SORT_ORDER: &str = "sortOrder";

/// Parameter names that can never be used as filter keys.
pub const RESERVED_PARAMS: [&str; 6] = [
    PARAM_PAGE,
    PARAM_PER_PAGE,
    PARAM_LIMIT,
    PARAM_SEARCH,
    PARAM_SORT_BY,
    PARAM_SORT_ORDER,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parses `asc`/`desc` case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single active sort column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Desc)
    }
}

/// Allowed page sizes and the size used when the URL carries none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSizes {
    sizes: Vec<usize>,
    default: usize,
}

impl PageSizes {
    /// Sorts and deduplicates `sizes`, dropping zero. Falls back to the first
    /// allowed size when `default` is not part of the set.
    pub fn new(sizes: impl IntoIterator<Item = usize>, default: usize) -> Self {
        let mut sizes: Vec<usize> = sizes.into_iter().filter(|size| *size > 0).collect();
        sizes.sort_unstable();
        sizes.dedup();
        if sizes.is_empty() {
            sizes.push(default.max(1));
        }
        let default = if sizes.contains(&default) {
            default
        } else {
            sizes[0]
        };
        Self { sizes, default }
    }

    pub fn default_size(&self) -> usize {
        self.default
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    pub fn contains(&self, size: usize) -> bool {
        self.sizes.contains(&size)
    }

    /// Returns `size` when allowed, the default size otherwise.
    pub fn clamp(&self, size: usize) -> usize {
        if self.contains(size) {
            size
        } else {
            self.default
        }
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        Self::new([10, 20, 30, 40, 50], 10)
    }
}

/// Page, page size, search, sort and filters of a list view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ListQueryState {
    pub page: usize,
    pub per_page: usize,
    pub search: String,
    pub sort: Option<SortSpec>,
    pub filters: BTreeMap<String, String>,
}

impl ListQueryState {
    /// First page, no search, no sort, no filters.
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            search: String::new(),
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    /// Derives the state from a raw URL query string.
    ///
    /// Unknown parameters are ignored, only `filter_keys` become filters. A
    /// missing or invalid page falls back to 1, a page size outside
    /// `page_sizes` falls back to its default. For repeated parameters the
    /// last occurrence wins.
    pub fn from_query(query: &str, filter_keys: &[&str], page_sizes: &PageSizes) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut page = None;
        let mut per_page = None;
        let mut limit = None;
        let mut search = String::new();
        let mut sort_by = None;
        let mut sort_order = None;
        let mut filters = BTreeMap::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            match &*key {
                PARAM_PAGE => page = value.parse::<usize>().ok(),
                PARAM_PER_PAGE => per_page = value.parse::<usize>().ok(),
                PARAM_LIMIT => limit = value.parse::<usize>().ok(),
                PARAM_SEARCH => search = value.to_string(),
                PARAM_SORT_BY => sort_by = Some(value.to_string()).filter(|v| !v.is_empty()),
                PARAM_SORT_ORDER => sort_order = SortOrder::parse(value),
                other if filter_keys.contains(&other) && !RESERVED_PARAMS.contains(&other) => {
                    if value.is_empty() {
                        filters.remove(other);
                    } else {
                        filters.insert(other.to_string(), value.to_string());
                    }
                }
                _ => {}
            }
        }

        Self {
            page: page.filter(|p| *p >= 1).unwrap_or(1),
            per_page: per_page
                .or(limit)
                .map(|size| page_sizes.clamp(size))
                .unwrap_or_else(|| page_sizes.default_size()),
            search,
            sort: sort_by.map(|column| SortSpec::new(column, sort_order.unwrap_or_default())),
            filters,
        }
    }

    /// Drops the sort when its column is not in `sortable`.
    #[must_use]
    pub fn restrict_sort(mut self, sortable: &[&str]) -> Self {
        if self
            .sort
            .as_ref()
            .is_some_and(|sort| !sortable.contains(&sort.column.as_str()))
        {
            self.sort = None;
        }
        self
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort.as_ref().map(|sort| sort.column.as_str())
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort.as_ref().map(|sort| sort.order).unwrap_or_default()
    }

    /// Whether any search text or filter narrows the result set.
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || !self.filters.is_empty()
    }

    /// Canonical parameter list. Empty values are omitted.
    pub fn params(&self) -> Vec<(&str, String)> {
        let mut params = vec![
            (PARAM_PAGE, self.page.to_string()),
            (PARAM_PER_PAGE, self.per_page.to_string()),
        ];
        if !self.search.is_empty() {
            params.push((PARAM_SEARCH, self.search.clone()));
        }
        if let Some(sort) = &self.sort {
            params.push((PARAM_SORT_BY, sort.column.clone()));
            params.push((PARAM_SORT_ORDER, sort.order.as_str().to_string()));
        }
        params.extend(
            self.filters
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (key.as_str(), value.clone())),
        );
        params
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.params() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Returns a new state with `patch` applied.
    ///
    /// Any change of search, page size, sort or a filter value sends the user
    /// back to the first page. The page from the patch is honoured only when
    /// nothing else changed.
    #[must_use]
    pub fn apply(&self, patch: &ListQueryPatch) -> Self {
        let mut next = self.clone();
        let mut reset_page = false;

        if let Some(per_page) = patch.per_page.filter(|size| *size > 0)
            && per_page != self.per_page
        {
            next.per_page = per_page;
            reset_page = true;
        }

        if let Some(search) = &patch.search {
            let search = search.trim();
            if search != self.search {
                next.search = search.to_string();
                reset_page = true;
            }
        }

        if let Some(sort) = &patch.sort
            && *sort != self.sort
        {
            next.sort = sort.clone();
            reset_page = true;
        }

        for (key, value) in &patch.filters {
            let value = value.as_deref().map(str::trim).filter(|v| !v.is_empty());
            if value == self.filter(key) {
                continue;
            }
            reset_page = true;
            match value {
                Some(value) => {
                    next.filters.insert(key.clone(), value.to_string());
                }
                None => {
                    next.filters.remove(key);
                }
            }
        }

        next.page = if reset_page {
            1
        } else {
            patch.page.unwrap_or(self.page).max(1)
        };

        next
    }
}

/// A set of changes to apply to a [`ListQueryState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQueryPatch {
    page: Option<usize>,
    per_page: Option<usize>,
    search: Option<String>,
    sort: Option<Option<SortSpec>>,
    filters: BTreeMap<String, Option<String>>,
}

impl ListQueryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(self, sort: SortSpec) -> Self {
        self.set_sort(Some(sort))
    }

    pub fn clear_sort(self) -> Self {
        self.set_sort(None)
    }

    pub fn set_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets a filter value; an empty value clears the filter.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), Some(value.into()));
        self
    }

    pub fn clear_filter(mut self, key: impl Into<String>) -> Self {
        self.filters.insert(key.into(), None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.per_page.is_none()
            && self.search.is_none()
            && self.sort.is_none()
            && self.filters.is_empty()
    }
}

/// Returns `path?query` for `current` with `patch` applied.
pub fn build_url(path: &str, current: &ListQueryState, patch: &ListQueryPatch) -> String {
    let next = current.apply(patch);
    format!("{path}?{}", next.to_query_string())
}
