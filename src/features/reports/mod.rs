pub mod dtos;
pub mod models;
pub mod services;

pub use services::{ReportAggregator, ReportService};
