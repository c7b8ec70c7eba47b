use serde::Serialize;

use crate::features::badges::models::BadgeTier;

/// Badge card on the profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSummaryDto {
    pub found_count: u32,
    pub tier: BadgeTier,
    /// Next tier up, absent at the top tier
    pub next_tier: Option<BadgeTier>,
    pub remaining_to_next: u32,
}
