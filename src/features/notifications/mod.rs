pub mod dtos;
pub mod models;
pub mod services;

pub use models::{Notification, NotificationType};
pub use services::NotificationState;
