use serde::Serialize;

use crate::list::meta::PageMeta;
use crate::list::query::{ListQueryPatch, ListQueryState, PageSizes, build_url};

/// Numbered page window with `None` marking an elided range.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let current_page = current_page.clamp(1, last_page);
    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageSizeOption {
    pub size: usize,
    pub href: String,
    pub selected: bool,
}

/// First/previous/next/last controls, numbered pages and the page-size
/// selector. A control without href is disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub label: String,
    pub first: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
    pub pages: Vec<Option<PageLink>>,
    pub page_sizes: Vec<PageSizeOption>,
}

impl PaginationControls {
    /// Boundaries come from `meta` as reported by the backend; hrefs are
    /// built from the URL state so every other parameter is preserved.
    pub fn new(path: &str, state: &ListQueryState, meta: &PageMeta, sizes: &PageSizes) -> Self {
        let page = meta.page.max(1);
        let total_pages = meta.total_pages();
        let href = |target: usize| build_url(path, state, &ListQueryPatch::new().page(target));

        let first = (page != 1).then(|| href(1));
        let previous = (page != 1).then(|| href(page.saturating_sub(1).max(1)));
        let next = meta.has_next.then(|| href(page.saturating_add(1)));
        let last = (page != total_pages).then(|| href(total_pages));

        let pages = get_pages(total_pages, page, 2, 2, 4, 2)
            .into_iter()
            .map(|entry| {
                entry.map(|number| PageLink {
                    number,
                    href: href(number),
                    current: number == page,
                })
            })
            .collect();

        let page_sizes = sizes
            .as_slice()
            .iter()
            .map(|&size| PageSizeOption {
                size,
                href: build_url(path, state, &ListQueryPatch::new().per_page(size)),
                selected: size == state.per_page,
            })
            .collect();

        Self {
            page,
            total_pages,
            total: meta.total,
            label: format!("Page {page} of {total_pages}"),
            first,
            previous,
            next,
            last,
            pages,
            page_sizes,
        }
    }

    pub fn first_disabled(&self) -> bool {
        self.first.is_none()
    }

    pub fn previous_disabled(&self) -> bool {
        self.previous.is_none()
    }

    pub fn next_disabled(&self) -> bool {
        self.next.is_none()
    }

    pub fn last_disabled(&self) -> bool {
        self.last.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_elides_middle_ranges() {
        assert_eq!(
            get_pages(20, 10, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn window_without_gaps_for_few_pages() {
        assert_eq!(
            get_pages(5, 1, 2, 2, 4, 2),
            (1..=5).map(Some).collect::<Vec<_>>()
        );
        assert!(get_pages(0, 1, 2, 2, 4, 2).is_empty());
    }

    #[test]
    fn middle_page_enables_everything() {
        let state = ListQueryState {
            page: 3,
            ..ListQueryState::new(10)
        };
        let controls = PaginationControls::new(
            "/courses",
            &state,
            &PageMeta::new(45, 3, 10),
            &PageSizes::default(),
        );
        assert_eq!(controls.first.as_deref(), Some("/courses?page=1&perPage=10"));
        assert_eq!(
            controls.previous.as_deref(),
            Some("/courses?page=2&perPage=10")
        );
        assert_eq!(controls.next.as_deref(), Some("/courses?page=4&perPage=10"));
        assert_eq!(controls.last.as_deref(), Some("/courses?page=5&perPage=10"));
        assert_eq!(controls.label, "Page 3 of 5");
        assert!(controls.pages.iter().flatten().any(|p| p.current && p.number == 3));
    }

    #[test]
    fn huge_page_from_url_on_empty_result() {
        let state = ListQueryState::from_query(
            &format!("page={}", usize::MAX),
            &[],
            &PageSizes::default(),
        );
        assert_eq!(state.page, usize::MAX);
        let meta = PageMeta {
            total: 0,
            page: state.page,
            limit: 10,
            has_next: false,
        };

        let controls = PaginationControls::new("/courses", &state, &meta, &PageSizes::default());
        assert_eq!(controls.total_pages, 1);
        assert_eq!(controls.next, None);
        assert_eq!(controls.last.as_deref(), Some("/courses?page=1&perPage=10"));
        assert_eq!(
            controls.pages,
            vec![Some(PageLink {
                number: 1,
                href: "/courses?page=1&perPage=10".to_string(),
                current: false,
            })]
        );
    }

    #[test]
    fn window_around_a_page_past_the_end_stays_in_range() {
        assert_eq!(
            get_pages(3, usize::MAX, 2, 2, 4, 2),
            (1..=3).map(Some).collect::<Vec<_>>()
        );
    }

    #[test]
    fn page_size_options_reset_to_first_page() {
        let state = ListQueryState {
            page: 3,
            ..ListQueryState::new(10)
        };
        let controls = PaginationControls::new(
            "/courses",
            &state,
            &PageMeta::new(45, 3, 10),
            &PageSizes::default(),
        );
        let twenty = controls
            .page_sizes
            .iter()
            .find(|option| option.size == 20)
            .unwrap();
        assert_eq!(twenty.href, "/courses?page=1&perPage=20");
        assert!(controls.page_sizes.iter().any(|o| o.size == 10 && o.selected));
    }
}
