mod badge_tier;

pub use badge_tier::BadgeTier;
