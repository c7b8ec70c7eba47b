use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::shared::constants::MONTH_NAMES;

/// Lost/found counters for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// 1 = January
    pub month: u32,
    pub lost: u64,
    pub found: u64,
}

impl MonthlyCount {
    pub fn get(&self, field: CountField) -> u64 {
        match field {
            CountField::Lost => self.lost,
            CountField::Found => self.found,
        }
    }

    pub fn label(&self) -> &'static str {
        month_label(self.month)
    }
}

/// Indonesian month name for a 1-based month index
pub fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("-")
}

/// Which counter of a monthly series to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountField {
    Lost,
    Found,
}

/// Time window of the status distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionScope {
    Year,
    Month,
}

impl FromStr for DistributionScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(DistributionScope::Year),
            "month" => Ok(DistributionScope::Month),
            other => Err(AppError::Validation(format!(
                "Unknown distribution scope: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1), "Januari");
        assert_eq!(month_label(12), "Desember");
        assert_eq!(month_label(0), "-");
        assert_eq!(month_label(13), "-");
    }

    #[test]
    fn test_scope_from_str() {
        assert_eq!("year".parse::<DistributionScope>().unwrap(), DistributionScope::Year);
        assert_eq!(" Month ".parse::<DistributionScope>().unwrap(), DistributionScope::Month);
        assert!("week".parse::<DistributionScope>().is_err());
    }
}
