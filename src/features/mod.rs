pub mod badges;
pub mod notifications;
pub mod reports;
pub mod statistics;
pub mod statuses;
