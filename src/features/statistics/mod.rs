pub mod dtos;
pub mod models;
pub mod services;

pub use models::{CountField, DistributionScope, MonthlyCount};
pub use services::StatisticsBucketer;
