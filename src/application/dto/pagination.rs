use crate::domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};

/// One page of a numbered listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let total_pages = request.total_pages(total);
        Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total,
            total_pages,
            has_next: request.page() < total_pages,
            has_previous: request.page() > 1,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_has_neighbours() {
        let request = PageRequest::new(2, 5).unwrap();
        let page = Page::new(vec![1, 2, 3, 4, 5], request, 12);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn last_page_has_no_next() {
        let request = PageRequest::new(3, 5).unwrap();
        let page = Page::new(vec![11, 12], request, 12);
        assert!(!page.has_next);
    }
}
