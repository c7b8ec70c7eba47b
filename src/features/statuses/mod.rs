pub mod models;
pub mod services;

pub use models::{ReportStatus, StatusEntry, StatusStyle};
pub use services::StatusCatalog;
