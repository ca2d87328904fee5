//! Pagination query parameters

use serde::Deserialize;

use crate::{error::AppResult, models::Pagination};

/// `?page=&pageSize=` query string
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PaginationQuery {
    pub fn into_pagination(self) -> AppResult<Pagination> {
        Pagination::new(self.page, self.page_size)
    }
}
