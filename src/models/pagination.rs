//! Pagination parameters

use crate::{
    constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
};

/// A validated page request (page at least 1, page size within 1..=MAX_PAGE_SIZE)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    /// Build a page request, applying defaults for missing values
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> AppResult<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 || page_size < 1 {
            return Err(AppError::Validation(
                "Page and page size must be greater than 0".to_string(),
            ));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(AppError::Validation(format!(
                "Page size must not exceed {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self { page, page_size })
    }

    /// Number of records to skip
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.page_size))
    }

    /// Number of records to take
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
