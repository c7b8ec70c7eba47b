use serde::Serialize;

use crate::features::notifications::models::Notification;

/// Notification dropdown contents with its unread badge count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListDto {
    pub items: Vec<Notification>,
    pub unread_count: usize,
}
