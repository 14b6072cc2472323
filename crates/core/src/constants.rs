//! Constants used throughout the triage core crate.

/// Default ward display name when no explicit name is configured.
pub const DEFAULT_WARD_NAME: &str = "HOSPITAL URGENCY SYSTEM";

/// Most critical urgency level value.
pub const URGENCY_MIN: u8 = 1;

/// Least critical urgency level value.
pub const URGENCY_MAX: u8 = 5;
