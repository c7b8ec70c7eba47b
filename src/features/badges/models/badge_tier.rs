use serde::{Deserialize, Serialize};

/// Reputation label unlocked once a user's found-count reaches `min_found`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeTier {
    pub id: i64,
    pub name: String,
    pub min_found: u32,
    pub icon: String,
}

impl BadgeTier {
    pub fn new(id: i64, name: impl Into<String>, min_found: u32, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            min_found,
            icon: icon.into(),
        }
    }

    /// The zero tier means "no badge yet"
    pub fn is_fallback(&self) -> bool {
        self.min_found == 0
    }
}
