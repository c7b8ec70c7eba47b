mod monthly_count;

pub use monthly_count::{CountField, DistributionScope, MonthlyCount};
