use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;

use crate::features::reports::dtos::ReportListItemDto;
use crate::features::reports::models::Report;
use crate::features::statuses::StatusCatalog;

#[allow(dead_code)]
pub fn fixed_time(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn create_report(id: i64, owner_user_id: i64, status_id: i64) -> Report {
    Report {
        id,
        owner_user_id,
        category_id: 1,
        status_id,
        room_id: 1,
        title: Sentence(2..5).fake(),
        description: Paragraph(1..3).fake(),
        phone: "081234567890".to_string(),
        found_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        images: vec![],
        created_at: fixed_time(1),
    }
}

/// Listing row with explicit names; status name follows the catalog
#[allow(dead_code)]
pub fn create_list_item(
    id: i64,
    status_id: i64,
    owner_name: &str,
    category_name: &str,
    location_name: &str,
) -> ReportListItemDto {
    let status_name = StatusCatalog::new()
        .name_of(status_id)
        .unwrap_or("Unknown")
        .to_string();

    ReportListItemDto {
        report: create_report(id, id, status_id),
        owner_name: owner_name.to_string(),
        category_name: category_name.to_string(),
        location_name: location_name.to_string(),
        status_name,
    }
}
