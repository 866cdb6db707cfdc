// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// A 1-based page window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn new(page: u32, per_page: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page numbers start at 1".into()));
        }
        if per_page == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self {
            page,
            per_page: per_page.min(Self::MAX_PER_PAGE),
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// Number of pages needed for `total` rows. An empty result still has one
    /// (empty) page so the first page is always addressable.
    pub fn total_pages(&self, total: u64) -> u32 {
        if total == 0 {
            1
        } else {
            ((total - 1) / u64::from(self.per_page) + 1) as u32
        }
    }

    pub fn ensure_in_range(&self, total: u64) -> DomainResult<()> {
        if self.page > self.total_pages(total) {
            return Err(DomainError::NotFound(format!(
                "page {} does not exist",
                self.page
            )));
        }
        Ok(())
    }
}
