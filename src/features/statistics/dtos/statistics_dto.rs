use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Month with the highest value of a counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakDto {
    /// `None` when every month is zero
    pub month: Option<u32>,
    pub label: String,
    pub value: u64,
}

/// Status counts shown by the distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionDto {
    pub counts: BTreeMap<String, u64>,
    pub total: u64,
}

/// One legend row under the distribution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntryDto {
    pub name: String,
    pub value: u64,
    pub percentage: f64,
    /// Percentage formatted with one decimal, e.g. "33.3"
    pub percentage_label: String,
    pub color: &'static str,
}

/// Yearly totals and peaks for the statistics header cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummaryDto {
    pub total_lost: u64,
    pub total_found: u64,
    pub peak_lost: PeakDto,
    pub peak_found: PeakDto,
}

/// Raw statistics payload from the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsFeedDto {
    #[serde(default)]
    pub lost_by_month: BTreeMap<u32, u64>,
    #[serde(default)]
    pub found_by_month: BTreeMap<u32, u64>,
    /// Yearly count per status name
    #[serde(default)]
    pub yearly_counts: BTreeMap<String, u64>,
}
