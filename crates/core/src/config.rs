//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed by
//! reference into whichever component needs it, rather than reading
//! process-wide environment variables during operation handling.

use crate::constants::DEFAULT_WARD_NAME;
use crate::NonEmptyText;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    ward_name: NonEmptyText,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(ward_name: NonEmptyText) -> Self {
        Self { ward_name }
    }

    /// The ward display name shown in console headers.
    pub fn ward_name(&self) -> &str {
        self.ward_name.as_str()
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(ward_name_from_env_value(None))
    }
}

/// Resolve the ward display name from an optional environment value.
///
/// If `value` is `None`, empty or whitespace-only, returns the default
/// ward name.
pub fn ward_name_from_env_value(value: Option<String>) -> NonEmptyText {
    value
        .and_then(|v| NonEmptyText::new(v).ok())
        .unwrap_or_else(|| {
            NonEmptyText::new(DEFAULT_WARD_NAME).expect("default ward name is non-blank")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ward_name_falls_back_to_default_when_absent() {
        let name = ward_name_from_env_value(None);
        assert_eq!(name.as_str(), DEFAULT_WARD_NAME);
    }

    #[test]
    fn ward_name_falls_back_to_default_when_blank() {
        let name = ward_name_from_env_value(Some("   ".into()));
        assert_eq!(name.as_str(), DEFAULT_WARD_NAME);
    }

    #[test]
    fn ward_name_uses_configured_value() {
        let name = ward_name_from_env_value(Some("Riverside A&E".into()));
        assert_eq!(name.as_str(), "Riverside A&E");
    }
}
