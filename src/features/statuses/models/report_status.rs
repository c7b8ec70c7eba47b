use serde::{Deserialize, Serialize};

/// Report status as stored by the portal API (ids are fixed server-side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    Ditemukan,
    Hilang,
    Dikembalikan,
    Tersimpan,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Ditemukan,
        ReportStatus::Hilang,
        ReportStatus::Dikembalikan,
        ReportStatus::Tersimpan,
    ];

    pub fn id(self) -> i64 {
        match self {
            ReportStatus::Ditemukan => 1,
            ReportStatus::Hilang => 2,
            ReportStatus::Dikembalikan => 3,
            ReportStatus::Tersimpan => 4,
        }
    }

    /// Display name exactly as the API stores it
    pub fn name(self) -> &'static str {
        match self {
            ReportStatus::Ditemukan => "Ditemukan",
            ReportStatus::Hilang => "Hilang",
            ReportStatus::Dikembalikan => "Dikembalikan",
            ReportStatus::Tersimpan => "Tersimpan",
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Lookup by display name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(wanted))
    }

    /// Whether a report in this status counts toward its owner's found-count.
    ///
    /// Lost reports describe the owner's own missing item and never count.
    pub fn counts_toward_found(self) -> bool {
        !matches!(self, ReportStatus::Hilang)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Presentation classes for a status badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    pub badge_class: &'static str,
    pub text_class: &'static str,
    pub dot_class: &'static str,
}

impl StatusStyle {
    /// Neutral style for statuses the catalog does not know
    pub const NEUTRAL: StatusStyle = StatusStyle {
        badge_class: "bg-gray-100",
        text_class: "text-gray-700",
        dot_class: "bg-gray-400",
    };
}

/// Catalog entry for one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub id: i64,
    pub name: &'static str,
    /// Hex color used by charts and legends
    pub display_color: &'static str,
    pub style: StatusStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ids_round_trip() {
        for status in ReportStatus::ALL {
            assert_eq!(ReportStatus::from_id(status.id()), Some(status));
            assert_eq!(ReportStatus::from_name(status.name()), Some(status));
        }
        assert_eq!(ReportStatus::from_id(0), None);
        assert_eq!(ReportStatus::from_name("Diklaim"), None);
    }

    #[test]
    fn test_only_lost_is_excluded_from_found_count() {
        let counted: Vec<i64> = ReportStatus::ALL
            .into_iter()
            .filter(|s| s.counts_toward_found())
            .map(ReportStatus::id)
            .collect();
        assert_eq!(counted, vec![1, 3, 4]);
    }
}
