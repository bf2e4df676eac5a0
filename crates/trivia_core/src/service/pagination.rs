//! Fixed-size page slicing over ordered result sets.
//!
//! # Invariants
//! - Page size is the process-wide `QUESTIONS_PER_PAGE`.
//! - Pages are 1-based; invalid page input silently means page 1.
//! - Slicing never reorders and never fails; out-of-range pages are empty.

/// Number of items on every page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page_number: 1 }
    }
}

impl PageRequest {
    /// Creates a page request; `0` falls back to page 1.
    pub fn new(page_number: usize) -> Self {
        Self {
            page_number: page_number.max(1),
        }
    }

    /// Parses a raw `page` query value.
    ///
    /// Missing, non-numeric, zero or negative values all yield page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    fn start(&self) -> usize {
        (self.page_number - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }
}

/// Returns the `page` slice of `items`, or an empty vec past the end.
pub fn paginate<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    let start = page.start();
    if start >= items.len() {
        return Vec::new();
    }
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{paginate, PageRequest, QUESTIONS_PER_PAGE};

    #[test]
    fn page_sizes_follow_item_count() {
        for total in [0usize, 1, 9, 10, 11, 19, 20, 35] {
            let items = (1..=total).collect::<Vec<_>>();
            for page in 1..=5usize {
                let expected = total
                    .saturating_sub(QUESTIONS_PER_PAGE * (page - 1))
                    .min(QUESTIONS_PER_PAGE);
                let got = paginate(items.clone(), PageRequest::new(page));
                assert_eq!(got.len(), expected, "total={total} page={page}");
            }
        }
    }

    #[test]
    fn second_page_keeps_order() {
        let items = (1..=19).collect::<Vec<_>>();
        let page = paginate(items, PageRequest::new(2));
        assert_eq!(page, (11..=19).collect::<Vec<_>>());
    }

    #[test]
    fn huge_page_number_is_empty_instead_of_overflowing() {
        let items = vec![1, 2, 3];
        assert!(paginate(items, PageRequest::new(usize::MAX)).is_empty());
    }

    #[test]
    fn from_query_defaults_silently_to_first_page() {
        assert_eq!(PageRequest::from_query(None).page_number(), 1);
        assert_eq!(PageRequest::from_query(Some("abc")).page_number(), 1);
        assert_eq!(PageRequest::from_query(Some("0")).page_number(), 1);
        assert_eq!(PageRequest::from_query(Some("-3")).page_number(), 1);
        assert_eq!(PageRequest::from_query(Some(" 3 ")).page_number(), 3);
    }
}
