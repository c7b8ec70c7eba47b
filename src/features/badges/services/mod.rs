mod badge_rules;

pub use badge_rules::BadgeRules;
