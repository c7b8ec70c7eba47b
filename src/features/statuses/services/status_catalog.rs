use crate::features::statuses::models::{ReportStatus, StatusEntry, StatusStyle};

/// Chart color for statuses the catalog does not know
const NEUTRAL_COLOR: &str = "#9CA3AF";

/// Fixed catalog of report statuses and their presentation metadata.
///
/// Lookups never fail: unknown names resolve to a neutral style so that a
/// status introduced server-side still renders.
#[derive(Debug, Clone)]
pub struct StatusCatalog {
    entries: Vec<StatusEntry>,
}

impl StatusCatalog {
    pub fn new() -> Self {
        let entries = ReportStatus::ALL
            .into_iter()
            .map(|status| {
                let (display_color, style) = match status {
                    ReportStatus::Ditemukan => (
                        "#22C55E",
                        StatusStyle {
                            badge_class: "bg-green-100",
                            text_class: "text-green-700",
                            dot_class: "bg-green-500",
                        },
                    ),
                    ReportStatus::Hilang => (
                        "#EF4444",
                        StatusStyle {
                            badge_class: "bg-red-100",
                            text_class: "text-red-700",
                            dot_class: "bg-red-500",
                        },
                    ),
                    ReportStatus::Dikembalikan => (
                        "#3B82F6",
                        StatusStyle {
                            badge_class: "bg-blue-100",
                            text_class: "text-blue-700",
                            dot_class: "bg-blue-500",
                        },
                    ),
                    ReportStatus::Tersimpan => (
                        "#F59E0B",
                        StatusStyle {
                            badge_class: "bg-yellow-100",
                            text_class: "text-yellow-700",
                            dot_class: "bg-yellow-500",
                        },
                    ),
                };

                StatusEntry {
                    id: status.id(),
                    name: status.name(),
                    display_color,
                    style,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn find_by_id(&self, id: i64) -> Option<&StatusEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&StatusEntry> {
        let status = ReportStatus::from_name(name)?;
        self.find_by_id(status.id())
    }

    /// Badge style for a status name, neutral when unknown
    pub fn style(&self, name: &str) -> &StatusStyle {
        match self.find_by_name(name) {
            Some(entry) => &entry.style,
            None => {
                tracing::debug!("Unknown status name {:?}, using neutral style", name);
                &StatusStyle::NEUTRAL
            }
        }
    }

    /// Chart color for a status name, neutral when unknown
    pub fn color(&self, name: &str) -> &'static str {
        self.find_by_name(name)
            .map(|e| e.display_color)
            .unwrap_or(NEUTRAL_COLOR)
    }

    /// Display name for a status id, if the catalog knows it
    pub fn name_of(&self, id: i64) -> Option<&'static str> {
        self.find_by_id(id).map(|e| e.name)
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self::new()
    }
}
