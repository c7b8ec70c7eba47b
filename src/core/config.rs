use std::env;

use chrono::{FixedOffset, Offset, Utc};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, DEFAULT_UTC_OFFSET_HOURS, MAX_PAGE_SIZE};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pagination: PaginationConfig,
    pub campus: CampusConfig,
}

#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

/// Campus-local settings used when deriving calendar buckets
#[derive(Debug, Clone)]
pub struct CampusConfig {
    /// Offset from UTC in whole hours (WIB = +7)
    pub utc_offset_hours: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            pagination: PaginationConfig::from_env()?,
            campus: CampusConfig::from_env()?,
        })
    }
}

impl PaginationConfig {
    pub fn from_env() -> Result<Self, String> {
        let default_page_size = env::var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse::<usize>()
            .map_err(|e| format!("Invalid DEFAULT_PAGE_SIZE: {}", e))?;

        let max_page_size = env::var("MAX_PAGE_SIZE")
            .unwrap_or_else(|_| MAX_PAGE_SIZE.to_string())
            .parse::<usize>()
            .map_err(|e| format!("Invalid MAX_PAGE_SIZE: {}", e))?;

        if default_page_size == 0 || max_page_size == 0 {
            return Err("Page sizes must be greater than zero".to_string());
        }

        if default_page_size > max_page_size {
            return Err(format!(
                "DEFAULT_PAGE_SIZE ({}) must not exceed MAX_PAGE_SIZE ({})",
                default_page_size, max_page_size
            ));
        }

        Ok(Self {
            default_page_size,
            max_page_size,
        })
    }

    /// Resolve a requested page size against the configured bounds
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl CampusConfig {
    pub fn from_env() -> Result<Self, String> {
        let utc_offset_hours = env::var("CAMPUS_UTC_OFFSET_HOURS")
            .unwrap_or_else(|_| DEFAULT_UTC_OFFSET_HOURS.to_string())
            .parse::<i32>()
            .map_err(|e| format!("Invalid CAMPUS_UTC_OFFSET_HOURS: {}", e))?;

        if !(-12..=14).contains(&utc_offset_hours) {
            return Err(format!(
                "CAMPUS_UTC_OFFSET_HOURS out of range: {}",
                utc_offset_hours
            ));
        }

        Ok(Self { utc_offset_hours })
    }

    pub fn offset(&self) -> FixedOffset {
        // Range is checked in from_env; fall back to UTC for hand-built values
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}
