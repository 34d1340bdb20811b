//! Configuration consumed by the activity recorder.

use serde::Deserialize;

/// Name of the log channel used when none is configured.
pub const DEFAULT_LOG_NAME: &str = "default";

/// Settings for activity recording.
///
/// Every field has a default, so the struct can be deserialized from a
/// partial section of a larger configuration file.
///
/// # Examples
///
/// ```
/// use activitylog::activity::ports::ActivityLogConfig;
///
/// let config = ActivityLogConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.default_log_name, "default");
/// assert!(config.default_auth_driver.is_none());
///
/// let quiet = ActivityLogConfig::disabled();
/// assert!(!quiet.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActivityLogConfig {
    /// Whether recording starts enabled.
    pub enabled: bool,
    /// Log channel assigned to records unless overridden.
    pub default_log_name: String,
    /// Authentication driver used to resolve actors. Falls back to the
    /// resolver's own default when unset.
    pub default_auth_driver: Option<String>,
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_log_name: DEFAULT_LOG_NAME.to_owned(),
            default_auth_driver: None,
        }
    }
}

impl ActivityLogConfig {
    /// Creates a configuration with recording switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Sets the default log channel.
    #[must_use]
    pub fn with_default_log_name(mut self, log_name: impl Into<String>) -> Self {
        self.default_log_name = log_name.into();
        self
    }

    /// Sets the authentication driver used for actor lookups.
    #[must_use]
    pub fn with_default_auth_driver(mut self, driver: impl Into<String>) -> Self {
        self.default_auth_driver = Some(driver.into());
        self
    }
}
