mod notification;

pub use notification::{Notification, NotificationType};
