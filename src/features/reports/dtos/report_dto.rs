use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::Report;
use crate::shared::constants::STATUS_FILTER_ALL;

// ============================================================================
// Inbound report shape
// ============================================================================

/// Report as received from the listing/detail endpoints, before validation
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub id: i64,
    pub owner_user_id: i64,
    pub category_id: i64,
    pub status_id: i64,
    pub room_id: i64,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: String,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Phone must be an Indonesian mobile number"
    ))]
    pub phone: String,

    pub found_date: NaiveDate,

    #[serde(default)]
    pub images: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReportDto> for Report {
    type Error = AppError;

    fn try_from(dto: ReportDto) -> Result<Self> {
        dto.validate()?;

        if let Some(bad) = dto.images.iter().find(|url| !url.validate_url()) {
            return Err(AppError::Validation(format!(
                "Report {} has an invalid image URL: {}",
                dto.id, bad
            )));
        }

        Ok(Report {
            id: dto.id,
            owner_user_id: dto.owner_user_id,
            category_id: dto.category_id,
            status_id: dto.status_id,
            room_id: dto.room_id,
            title: dto.title,
            description: dto.description,
            phone: dto.phone,
            found_date: dto.found_date,
            images: dto.images,
            created_at: dto.created_at,
        })
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Report row with the related names the listing endpoint joins in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportListItemDto {
    #[serde(flatten)]
    pub report: Report,
    pub owner_name: String,
    pub category_name: String,
    pub location_name: String,
    pub status_name: String,
}

fn default_status_filter() -> String {
    STATUS_FILTER_ALL.to_string()
}

/// Search box and status dropdown of the report tables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilterParams {
    #[serde(default)]
    pub search_text: String,

    /// Status name, or "all"
    #[serde(default = "default_status_filter")]
    pub status_filter: String,
}

impl Default for ReportFilterParams {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status_filter: default_status_filter(),
        }
    }
}

fn default_page() -> usize {
    1
}

/// Filter plus page selection for one table render
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQueryParams {
    #[serde(flatten)]
    pub filter: ReportFilterParams,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Falls back to the configured default when absent
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl Default for ReportQueryParams {
    fn default() -> Self {
        Self {
            filter: ReportFilterParams::default(),
            page: default_page(),
            page_size: None,
        }
    }
}

/// Admin request to move a report to another status
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportStatusDto {
    #[validate(range(min = 1, message = "Status id must be positive"))]
    pub status_id: i64,
}
