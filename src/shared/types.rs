use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// Envelope returned by the portal API for every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning failure envelopes into errors
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            let mut reason = self
                .message
                .unwrap_or_else(|| "request was not successful".to_string());
            if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
                reason = format!("{} ({})", reason, errors.join("; "));
            }
            return Err(AppError::Upstream(reason));
        }

        self.data
            .ok_or_else(|| AppError::Upstream("response has no data".to_string()))
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a raw response body and unwrap its payload
    pub fn decode(body: &str) -> Result<T> {
        let response: ApiResponse<T> = serde_json::from_str(body)?;
        response.into_data()
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Pagination metadata for a rendered table page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PaginationMeta {
    /// Compute page count and clamp the requested page into range.
    ///
    /// There is always at least one page, so an empty list renders as an
    /// empty first page.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        assert!(page_size > 0, "page_size must be greater than zero");

        let total_pages = total_items.div_ceil(page_size).max(1);
        Self {
            page: page.clamp(1, total_pages),
            page_size,
            total_items,
            total_pages,
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

/// One page of items together with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
