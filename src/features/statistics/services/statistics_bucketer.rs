use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};

use crate::core::config::CampusConfig;
use crate::features::statistics::dtos::{
    DistributionDto, LegendEntryDto, PeakDto, StatisticsFeedDto, YearSummaryDto,
};
use crate::features::statistics::models::{CountField, DistributionScope, MonthlyCount};
use crate::features::statuses::{ReportStatus, StatusCatalog};
use crate::shared::constants::EMPTY_PEAK_LABEL;

/// Pivots per-month counters into chart series and derived summaries
#[derive(Debug, Clone, Default)]
pub struct StatisticsBucketer {
    catalog: StatusCatalog,
    campus: CampusConfig,
}

impl StatisticsBucketer {
    pub fn new(catalog: StatusCatalog, campus: CampusConfig) -> Self {
        Self { catalog, campus }
    }

    // ========================================================================
    // Series
    // ========================================================================

    /// Twelve months January to December, zero-filled.
    ///
    /// Keys outside 1..=12 are ignored.
    pub fn build_monthly_series(
        &self,
        lost_by_month: &BTreeMap<u32, u64>,
        found_by_month: &BTreeMap<u32, u64>,
    ) -> [MonthlyCount; 12] {
        for (name, map) in [("lost", lost_by_month), ("found", found_by_month)] {
            for month in map.keys().filter(|m| !(1..=12).contains(*m)) {
                tracing::warn!("Ignoring {} counter for invalid month {}", name, month);
            }
        }

        std::array::from_fn(|i| {
            let month = i as u32 + 1;
            MonthlyCount {
                month,
                lost: lost_by_month.get(&month).copied().unwrap_or(0),
                found: found_by_month.get(&month).copied().unwrap_or(0),
            }
        })
    }

    /// Series straight from the API statistics payload
    pub fn series_from_feed(&self, feed: &StatisticsFeedDto) -> [MonthlyCount; 12] {
        self.build_monthly_series(&feed.lost_by_month, &feed.found_by_month)
    }

    /// Month with the highest value of `field`.
    ///
    /// Ties go to the earlier month. An all-zero series yields value 0 with a
    /// placeholder label.
    pub fn find_peak(&self, series: &[MonthlyCount], field: CountField) -> PeakDto {
        let mut peak: Option<&MonthlyCount> = None;
        for entry in series {
            let value = entry.get(field);
            if value > 0 && peak.map_or(true, |p| value > p.get(field)) {
                peak = Some(entry);
            }
        }

        match peak {
            Some(entry) => PeakDto {
                month: Some(entry.month),
                label: entry.label().to_string(),
                value: entry.get(field),
            },
            None => PeakDto {
                month: None,
                label: EMPTY_PEAK_LABEL.to_string(),
                value: 0,
            },
        }
    }

    /// Totals and peaks for both counters
    pub fn summarize(&self, series: &[MonthlyCount]) -> YearSummaryDto {
        YearSummaryDto {
            total_lost: saturating_sum(series.iter().map(|m| m.lost)),
            total_found: saturating_sum(series.iter().map(|m| m.found)),
            peak_lost: self.find_peak(series, CountField::Lost),
            peak_found: self.find_peak(series, CountField::Found),
        }
    }

    // ========================================================================
    // Distribution
    // ========================================================================

    /// Calendar month (1-12) of `now` in campus local time
    pub fn current_month(&self, now: DateTime<Utc>) -> u32 {
        now.with_timezone(&self.campus.offset()).month()
    }

    /// Status counts for the distribution chart.
    ///
    /// The year scope passes the yearly totals through. The month scope only
    /// has the lost/found feed, so it exposes just Hilang and Ditemukan for
    /// `current_month`.
    ///
    /// # Panics
    ///
    /// Panics if `current_month` is outside 1..=12.
    pub fn select_distribution(
        &self,
        scope: DistributionScope,
        yearly_counts: &BTreeMap<String, u64>,
        series: &[MonthlyCount; 12],
        current_month: u32,
    ) -> DistributionDto {
        assert!(
            (1..=12).contains(&current_month),
            "current_month must be in 1..=12, got {}",
            current_month
        );

        match scope {
            DistributionScope::Year => DistributionDto {
                counts: yearly_counts.clone(),
                total: saturating_sum(yearly_counts.values().copied()),
            },
            DistributionScope::Month => {
                let entry = &series[current_month as usize - 1];
                let counts = BTreeMap::from([
                    (ReportStatus::Hilang.name().to_string(), entry.lost),
                    (ReportStatus::Ditemukan.name().to_string(), entry.found),
                ]);

                DistributionDto {
                    counts,
                    total: entry.lost.saturating_add(entry.found),
                }
            }
        }
    }

    /// Share of `value` in `total` as a percentage with one decimal, 0 when
    /// `total` is 0
    pub fn percentage(value: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (value as f64 / total as f64 * 1000.0).round() / 10.0
    }

    /// Legend rows in catalog order, unknown statuses last
    pub fn legend(&self, distribution: &DistributionDto) -> Vec<LegendEntryDto> {
        let mut entries: Vec<LegendEntryDto> = distribution
            .counts
            .iter()
            .map(|(name, &value)| {
                let percentage = Self::percentage(value, distribution.total);
                LegendEntryDto {
                    name: name.clone(),
                    value,
                    percentage,
                    percentage_label: format!("{:.1}", percentage),
                    color: self.catalog.color(name),
                }
            })
            .collect();

        entries.sort_by_key(|e| {
            self.catalog
                .find_by_name(&e.name)
                .map(|s| s.id)
                .unwrap_or(i64::MAX)
        });
        entries
    }
}

/// Counters come from the API unchecked; totals stop at `u64::MAX`
fn saturating_sum(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}
