use chrono::{DateTime, Utc};

use crate::core::session::Session;
use crate::features::notifications::dtos::NotificationListDto;
use crate::features::notifications::models::Notification;

/// Client-side read-state reconciliation for polled notifications.
///
/// Transitions never remove or reorder entries and never clear a `read_at`
/// that is already set. The network layer persisting the same transitions
/// must follow the same rules.
#[derive(Debug, Clone, Default)]
pub struct NotificationState;

impl NotificationState {
    pub fn new() -> Self {
        Self
    }

    /// Mark one notification read at `now`; no-op if unknown or already read
    pub fn mark_read(
        &self,
        mut notifications: Vec<Notification>,
        id: i64,
        now: DateTime<Utc>,
    ) -> Vec<Notification> {
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(n) if n.read_at.is_none() => n.read_at = Some(now),
            Some(_) => tracing::debug!("Notification {} already read", id),
            None => tracing::debug!("Notification {} not in list", id),
        }
        notifications
    }

    /// Mark every unread notification read with the same `now`
    pub fn mark_all_read(
        &self,
        mut notifications: Vec<Notification>,
        now: DateTime<Utc>,
    ) -> Vec<Notification> {
        let mut marked = 0;
        for n in notifications.iter_mut().filter(|n| n.read_at.is_none()) {
            n.read_at = Some(now);
            marked += 1;
        }

        tracing::debug!(marked, "Notifications marked read");
        notifications
    }

    pub fn unread_count(&self, notifications: &[Notification]) -> usize {
        notifications.iter().filter(|n| !n.is_read()).count()
    }

    /// Keep only notifications addressed to the session user
    pub fn for_recipient(
        &self,
        notifications: Vec<Notification>,
        session: &Session,
    ) -> Vec<Notification> {
        let total = notifications.len();
        let mine: Vec<Notification> = notifications
            .into_iter()
            .filter(|n| n.recipient_user_id == session.user_id)
            .collect();

        if mine.len() != total {
            tracing::warn!(
                user_id = session.user_id,
                dropped = total - mine.len(),
                "Dropped notifications addressed to other users"
            );
        }
        mine
    }

    /// Dropdown view-model for the session user
    pub fn list(&self, notifications: Vec<Notification>, session: &Session) -> NotificationListDto {
        let items = self.for_recipient(notifications, session);
        let unread_count = self.unread_count(&items);
        NotificationListDto {
            items,
            unread_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Role;
    use crate::features::notifications::models::NotificationType;
    use crate::shared::test_helpers::fixed_time;

    fn notification(id: i64, recipient: i64, read_at: Option<DateTime<Utc>>) -> Notification {
        Notification {
            id,
            recipient_user_id: recipient,
            kind: NotificationType::Info,
            title: "Laporan diperbarui".to_string(),
            message: "Status laporan Anda berubah menjadi Dikembalikan".to_string(),
            action_url: Some("/laporan/12".to_string()),
            created_at: fixed_time(1),
            read_at,
        }
    }

    fn sample() -> Vec<Notification> {
        vec![
            notification(1, 7, None),
            notification(2, 7, Some(fixed_time(2))),
            notification(3, 7, None),
        ]
    }

    #[test]
    fn test_mark_read_sets_timestamp_once() {
        let state = NotificationState::new();
        let list = sample();
        let id = list[0].id;

        let list = state.mark_read(list, id, fixed_time(5));
        assert_eq!(list[0].read_at, Some(fixed_time(5)));

        let list = state.mark_read(list, id, fixed_time(9));
        assert_eq!(list[0].read_at, Some(fixed_time(5)));
    }

    #[test]
    fn test_mark_read_keeps_existing_timestamp() {
        let state = NotificationState::new();
        let list = sample();
        let id = list[1].id;

        let list = state.mark_read(list, id, fixed_time(5));
        assert_eq!(list[1].read_at, Some(fixed_time(2)));
    }

    #[test]
    fn test_mark_read_unknown_id_is_noop() {
        let state = NotificationState::new();
        let before = sample();

        let after = state.mark_read(before.clone(), 99, fixed_time(5));
        assert_eq!(after, before);
    }

    #[test]
    fn test_mark_all_read_preserves_order_and_old_timestamps() {
        let state = NotificationState::new();
        let before = sample();
        let ids: Vec<i64> = before.iter().map(|n| n.id).collect();

        let after = state.mark_all_read(before, fixed_time(5));
        assert_eq!(after.iter().map(|n| n.id).collect::<Vec<_>>(), ids);
        assert_eq!(after[0].read_at, Some(fixed_time(5)));
        assert_eq!(after[1].read_at, Some(fixed_time(2)));
        assert_eq!(after[2].read_at, Some(fixed_time(5)));
        assert_eq!(state.unread_count(&after), 0);
    }

    #[test]
    fn test_mark_all_read_is_idempotent() {
        let state = NotificationState::new();

        let once = state.mark_all_read(sample(), fixed_time(5));
        let twice = state.mark_all_read(once.clone(), fixed_time(6));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unread_count() {
        let state = NotificationState::new();
        assert_eq!(state.unread_count(&sample()), 2);
        assert_eq!(state.unread_count(&[]), 0);
    }

    #[test]
    fn test_list_for_session_user() {
        let state = NotificationState::new();
        let mut all = sample();
        all.push(notification(4, 8, None));
        let session = Session::new(7, "Rina", Role::User);

        let list = state.list(all, &session);
        assert_eq!(list.items.len(), 3);
        assert!(list.items.iter().all(|n| n.recipient_user_id == 7));
        assert_eq!(list.unread_count, 2);
    }

    #[test]
    fn test_notification_json_shape() {
        let body = r#"{
            "id": 42,
            "recipientUserId": 7,
            "type": "warning",
            "title": "Laporan ditolak",
            "message": "Foto tidak jelas",
            "createdAt": "2025-03-01T08:00:00Z",
            "readAt": null
        }"#;

        let n: Notification = serde_json::from_str(body).unwrap();
        assert_eq!(n.id, 42);
        assert_eq!(n.kind, NotificationType::Warning);
        assert!(n.action_url.is_none());
        assert!(!n.is_read());
    }
}
