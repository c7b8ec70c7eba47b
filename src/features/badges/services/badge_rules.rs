use std::collections::HashSet;

use crate::core::error::{AppError, Result};
use crate::core::session::Session;
use crate::features::badges::dtos::BadgeSummaryDto;
use crate::features::badges::models::BadgeTier;
use crate::features::reports::models::Report;

/// Badge tier table and found-count rules
#[derive(Debug, Clone)]
pub struct BadgeRules {
    /// Sorted by `min_found`, highest first; last entry has `min_found == 0`
    tiers: Vec<BadgeTier>,
}

impl BadgeRules {
    /// Build rules from an arbitrary tier table.
    ///
    /// Thresholds must be distinct and one tier must start at zero so that
    /// every count maps to exactly one tier.
    pub fn new(mut tiers: Vec<BadgeTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(AppError::Validation(
                "Badge table must contain at least one tier".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = tiers.iter().find(|t| !seen.insert(t.min_found)) {
            return Err(AppError::Validation(format!(
                "Duplicate badge threshold {} ({})",
                dup.min_found, dup.name
            )));
        }

        if !tiers.iter().any(BadgeTier::is_fallback) {
            return Err(AppError::Validation(
                "Badge table must contain a tier with threshold 0".to_string(),
            ));
        }

        tiers.sort_by(|a, b| b.min_found.cmp(&a.min_found));
        Ok(Self { tiers })
    }

    /// Tiers ordered from highest threshold to lowest
    pub fn tiers(&self) -> &[BadgeTier] {
        &self.tiers
    }

    /// Highest tier whose threshold `found_count` meets
    pub fn assign_badge(&self, found_count: u32) -> &BadgeTier {
        self.tiers
            .iter()
            .find(|tier| found_count >= tier.min_found)
            // the zero tier matches every count
            .unwrap_or_else(|| &self.tiers[self.tiers.len() - 1])
    }

    /// Count the user's reports that count toward their finder reputation.
    ///
    /// Only Ditemukan, Dikembalikan and Tersimpan count. Hilang reports
    /// (the user's own lost items) and unknown statuses do not.
    pub fn count_found_reports(&self, reports: &[Report], user_id: i64) -> u32 {
        let count = reports
            .iter()
            .filter(|r| r.is_owned_by(user_id) && r.counts_toward_found())
            .count();

        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Badge card for the signed-in user
    pub fn profile_badge(&self, reports: &[Report], session: &Session) -> BadgeSummaryDto {
        let found_count = self.count_found_reports(reports, session.user_id);
        let tier = self.assign_badge(found_count).clone();

        // tiers are sorted descending, so the next one up is the closest
        // threshold above the current count
        let next_tier = self
            .tiers
            .iter()
            .rev()
            .find(|t| t.min_found > found_count)
            .cloned();

        let remaining_to_next = next_tier
            .as_ref()
            .map(|t| t.min_found - found_count)
            .unwrap_or(0);

        tracing::debug!(
            user_id = session.user_id,
            found_count,
            tier = %tier.name,
            "Badge assigned"
        );

        BadgeSummaryDto {
            found_count,
            tier,
            next_tier,
            remaining_to_next,
        }
    }
}

impl Default for BadgeRules {
    fn default() -> Self {
        Self {
            tiers: vec![
                BadgeTier::new(4, "Pahlawan Kampus", 10, "🏆"),
                BadgeTier::new(3, "Penemu Andal", 3, "🥈"),
                BadgeTier::new(2, "Penemu Pemula", 1, "🥉"),
                BadgeTier::new(1, "Belum Ada Lencana", 0, ""),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Role;
    use crate::shared::test_helpers::create_report;

    #[test]
    fn test_default_thresholds() {
        let rules = BadgeRules::default();
        assert_eq!(rules.assign_badge(0).name, "Belum Ada Lencana");
        assert_eq!(rules.assign_badge(1).name, "Penemu Pemula");
        assert_eq!(rules.assign_badge(2).name, "Penemu Pemula");
        assert_eq!(rules.assign_badge(3).name, "Penemu Andal");
        assert_eq!(rules.assign_badge(9).name, "Penemu Andal");
        assert_eq!(rules.assign_badge(10).name, "Pahlawan Kampus");
        assert_eq!(rules.assign_badge(u32::MAX).name, "Pahlawan Kampus");
    }

    #[test]
    fn test_default_table_is_valid() {
        let rules = BadgeRules::default();
        let rebuilt = BadgeRules::new(rules.tiers().to_vec()).unwrap();
        assert_eq!(rebuilt.tiers(), rules.tiers());
    }

    #[test]
    fn test_tier_never_downgrades() {
        let rules = BadgeRules::default();
        let mut previous = 0;
        for count in 0..50 {
            let tier = rules.assign_badge(count);
            assert!(count >= tier.min_found);
            assert!(tier.min_found >= previous);
            previous = tier.min_found;
        }
    }

    #[test]
    fn test_new_sorts_tiers() {
        let rules = BadgeRules::new(vec![
            BadgeTier::new(1, "Nol", 0, ""),
            BadgeTier::new(3, "Lima", 5, "*"),
            BadgeTier::new(2, "Dua", 2, "+"),
        ])
        .unwrap();

        let thresholds: Vec<u32> = rules.tiers().iter().map(|t| t.min_found).collect();
        assert_eq!(thresholds, vec![5, 2, 0]);
        assert_eq!(rules.assign_badge(4).name, "Dua");
    }

    #[test]
    fn test_new_rejects_invalid_tables() {
        assert!(BadgeRules::new(vec![]).is_err());

        let no_zero = vec![BadgeTier::new(1, "Satu", 1, "")];
        assert!(matches!(
            BadgeRules::new(no_zero),
            Err(AppError::Validation(_))
        ));

        let duplicate = vec![
            BadgeTier::new(1, "Nol", 0, ""),
            BadgeTier::new(2, "A", 3, ""),
            BadgeTier::new(3, "B", 3, ""),
        ];
        assert!(matches!(
            BadgeRules::new(duplicate),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_count_found_reports_excludes_lost() {
        let rules = BadgeRules::default();
        let reports = vec![
            create_report(1, 7, 1), // Ditemukan
            create_report(2, 7, 2), // Hilang
            create_report(3, 7, 3), // Dikembalikan
            create_report(4, 7, 4), // Tersimpan
            create_report(5, 7, 2), // Hilang
            create_report(6, 8, 1), // other owner
            create_report(7, 7, 9), // unknown status
        ];

        assert_eq!(rules.count_found_reports(&reports, 7), 3);
        assert_eq!(rules.count_found_reports(&reports, 8), 1);
        assert_eq!(rules.count_found_reports(&reports, 9), 0);
    }

    #[test]
    fn test_profile_badge() {
        let rules = BadgeRules::default();
        let session = Session::new(7, "Rina", Role::User);
        let reports: Vec<Report> = (1..=4).map(|id| create_report(id, 7, 1)).collect();

        let badge = rules.profile_badge(&reports, &session);
        assert_eq!(badge.found_count, 4);
        assert_eq!(badge.tier.name, "Penemu Andal");
        assert_eq!(
            badge.next_tier.as_ref().map(|t| t.name.as_str()),
            Some("Pahlawan Kampus")
        );
        assert_eq!(badge.remaining_to_next, 6);
    }

    #[test]
    fn test_profile_badge_at_top_tier() {
        let rules = BadgeRules::default();
        let session = Session::new(7, "Rina", Role::User);
        let reports: Vec<Report> = (1..=12).map(|id| create_report(id, 7, 3)).collect();

        let badge = rules.profile_badge(&reports, &session);
        assert_eq!(badge.tier.name, "Pahlawan Kampus");
        assert!(badge.next_tier.is_none());
        assert_eq!(badge.remaining_to_next, 0);
    }
}
