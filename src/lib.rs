//! Derived-state layer of the campus lost-and-found portal.
//!
//! Screens hand in records fetched from the portal API and get back
//! view-models: status badges, finder badges, filtered report tables,
//! chart series and notification read-state. Nothing here performs I/O.

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::core::session::{Role, Session};
