pub mod dtos;
pub mod models;
pub mod services;

pub use models::BadgeTier;
pub use services::BadgeRules;
