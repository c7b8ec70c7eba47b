use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::features::statuses::ReportStatus;

/// Lost-and-found report as returned by the portal API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub owner_user_id: i64,
    pub category_id: i64,
    pub status_id: i64,
    pub room_id: i64,
    pub title: String,
    pub description: String,
    pub phone: String,
    pub found_date: NaiveDate,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Known status of this report, `None` for ids the catalog does not have
    pub fn status(&self) -> Option<ReportStatus> {
        ReportStatus::from_id(self.status_id)
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_user_id == user_id
    }

    pub fn counts_toward_found(&self) -> bool {
        self.status().is_some_and(ReportStatus::counts_toward_found)
    }
}
