mod notification_state;

pub use notification_state::NotificationState;
