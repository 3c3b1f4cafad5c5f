use serde::{Deserialize, Serialize};

/// Pagination metadata reported by the backend for one fetched page.
///
/// `has_next == page * limit < total` is expected to hold; it is not checked
/// here and the next-page control trusts `has_next` as reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub has_next: bool,
}

impl PageMeta {
    /// Builds metadata for callers that compute totals themselves.
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        Self {
            total,
            page,
            limit,
            has_next: page.saturating_mul(limit) < total,
        }
    }

    /// Metadata of an empty first page.
    pub fn empty(limit: usize) -> Self {
        Self::new(0, 1, limit)
    }

    /// `max(1, ceil(total / limit))`.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit.max(1)).max(1)
    }

    /// Whether `page` lies past the last page of a non-empty result.
    pub fn is_past_end(&self, page: usize) -> bool {
        self.total > 0 && page > self.total_pages()
    }
}

/// Rows of one page together with their metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn empty(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta::empty(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_never_drops_below_one() {
        assert_eq!(PageMeta::new(45, 1, 10).total_pages(), 5);
        assert_eq!(PageMeta::new(50, 1, 10).total_pages(), 5);
        assert_eq!(PageMeta::new(51, 1, 10).total_pages(), 6);
        assert_eq!(PageMeta::new(0, 1, 10).total_pages(), 1);
    }

    #[test]
    fn zero_limit_is_treated_as_one() {
        let meta = PageMeta {
            total: 3,
            page: 1,
            limit: 0,
            has_next: true,
        };
        assert_eq!(meta.total_pages(), 3);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let meta = PageMeta::new(0, usize::MAX, 10);
        assert!(!meta.has_next);
        assert!(!meta.is_past_end(usize::MAX));
    }

    #[test]
    fn has_next_follows_server_contract() {
        assert!(PageMeta::new(45, 4, 10).has_next);
        assert!(!PageMeta::new(45, 5, 10).has_next);
    }

    #[test]
    fn past_end_only_for_non_empty_results() {
        let meta = PageMeta::new(45, 9, 10);
        assert!(meta.is_past_end(9));
        assert!(!meta.is_past_end(5));
        assert!(!PageMeta::empty(10).is_past_end(3));
    }

    #[test]
    fn deserializes_camel_case() {
        let meta: PageMeta =
            serde_json::from_str(r#"{"total":12,"page":2,"limit":5,"hasNext":true}"#).unwrap();
        assert_eq!(meta, PageMeta::new(12, 2, 5));
    }
}
