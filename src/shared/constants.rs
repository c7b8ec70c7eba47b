/// Default page size for report tables
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: usize = 100;

/// Campus local time offset (WIB)
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

// =============================================================================
// FILTER CONSTANTS
// =============================================================================

/// Status filter value that disables status filtering
pub const STATUS_FILTER_ALL: &str = "all";

/// Placeholder label when a chart series has no activity at all
pub const EMPTY_PEAK_LABEL: &str = "-";

/// Indonesian month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];
