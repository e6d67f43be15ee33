//! Typed application configuration parsed from environment variables.
//!
//! The configuration is an explicitly constructed, immutable value passed
//! down to whoever needs it; there is no process-wide singleton. Parsing is
//! lenient: unrecognised environment or log-level values fall back to their
//! defaults rather than failing startup.

use std::fmt;
use tracing::Level;

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Pre-production staging.
    Staging,
    /// Production.
    Production,
}

impl Environment {
    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Parses an environment name, case-insensitively.
    ///
    /// Returns `None` for unrecognised values; the loader falls back to
    /// [`Environment::Development`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" => Some(Self::Development),
            "staging" => Some(Self::Staging),
            "production" => Some(Self::Production),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Verbose diagnostic output.
    Debug,
    /// Routine operational messages.
    #[default]
    Info,
    /// Unexpected but recoverable conditions.
    Warning,
    /// Operation failures.
    Error,
    /// Unrecoverable failures. Maps onto the error tracing level.
    Critical,
}

impl LogLevel {
    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Parses a log level name, case-insensitively.
    ///
    /// Returns `None` for unrecognised values; the loader falls back to
    /// [`LogLevel::Info`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Returns the `tracing` level this log level maps onto.
    #[must_use]
    pub const fn tracing_level(self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error | Self::Critical => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment, from `ENVIRONMENT`.
    pub environment: Environment,
    /// Debug mode, from `DEBUG`.
    pub debug: bool,
    /// Log level, from `LOG_LEVEL`.
    pub log_level: LogLevel,
    /// Application display name, from `APP_NAME`.
    pub app_name: String,
    /// Application version, from `APP_VERSION` or `VERSION`.
    pub version: String,
}

impl AppConfig {
    /// Default application name when `APP_NAME` is unset.
    pub const DEFAULT_APP_NAME: &'static str = "taskboard";

    /// Default version when neither `APP_VERSION` nor `VERSION` is set.
    pub const DEFAULT_VERSION: &'static str = "0.1.0";

    /// Loads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Tests use this to supply variables without mutating the process
    /// environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENVIRONMENT")
            .and_then(|raw| Environment::parse(&raw))
            .unwrap_or_default();
        let debug = lookup("DEBUG").map_or(true, |raw| parse_bool(&raw));
        let log_level = lookup("LOG_LEVEL")
            .and_then(|raw| LogLevel::parse(&raw))
            .unwrap_or_default();
        let app_name =
            lookup("APP_NAME").unwrap_or_else(|| Self::DEFAULT_APP_NAME.to_owned());
        let version = lookup("APP_VERSION")
            .or_else(|| lookup("VERSION"))
            .unwrap_or_else(|| Self::DEFAULT_VERSION.to_owned());

        Self {
            environment,
            debug,
            log_level,
            app_name,
            version,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Parses a boolean flag the way the `DEBUG` variable is documented:
/// `true`, `1`, and `yes` (case-insensitively) are true, anything else is
/// false.
fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]

    use super::{AppConfig, Environment, LogLevel};
    use rstest::rstest;
    use std::collections::HashMap;
    use tracing::Level;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[rstest]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]);

        assert_eq!(config.environment, Environment::Development);
        assert!(config.debug);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.app_name, AppConfig::DEFAULT_APP_NAME);
        assert_eq!(config.version, AppConfig::DEFAULT_VERSION);
    }

    #[rstest]
    fn custom_values_override_defaults() {
        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("DEBUG", "false"),
            ("LOG_LEVEL", "WARNING"),
            ("APP_NAME", "custom-app"),
            ("APP_VERSION", "1.0.0"),
        ]);

        assert_eq!(config.environment, Environment::Production);
        assert!(!config.debug);
        assert_eq!(config.log_level, LogLevel::Warning);
        assert_eq!(config.app_name, "custom-app");
        assert_eq!(config.version, "1.0.0");
    }

    #[rstest]
    #[case("true", true)]
    #[case("True", true)]
    #[case("TRUE", true)]
    #[case("1", true)]
    #[case("yes", true)]
    #[case("false", false)]
    #[case("False", false)]
    #[case("0", false)]
    #[case("no", false)]
    #[case("banana", false)]
    fn debug_flag_parsing(#[case] raw: &str, #[case] expected: bool) {
        let config = config_from(&[("DEBUG", raw)]);
        assert_eq!(config.debug, expected);
    }

    #[rstest]
    fn invalid_environment_falls_back_to_development() {
        let config = config_from(&[("ENVIRONMENT", "galaxy")]);
        assert_eq!(config.environment, Environment::Development);
    }

    #[rstest]
    fn invalid_log_level_falls_back_to_info() {
        let config = config_from(&[("LOG_LEVEL", "LOUD")]);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[rstest]
    fn environment_parsing_is_case_insensitive() {
        assert_eq!(
            Environment::parse("Staging").expect("valid environment"),
            Environment::Staging
        );
    }

    #[rstest]
    fn version_falls_back_to_bare_version_variable() {
        let config = config_from(&[("VERSION", "2.3.4")]);
        assert_eq!(config.version, "2.3.4");
    }

    #[rstest]
    fn app_version_takes_precedence_over_version() {
        let config = config_from(&[("APP_VERSION", "9.9.9"), ("VERSION", "2.3.4")]);
        assert_eq!(config.version, "9.9.9");
    }

    #[rstest]
    #[case(LogLevel::Debug, Level::DEBUG)]
    #[case(LogLevel::Info, Level::INFO)]
    #[case(LogLevel::Warning, Level::WARN)]
    #[case(LogLevel::Error, Level::ERROR)]
    #[case(LogLevel::Critical, Level::ERROR)]
    fn log_levels_map_onto_tracing_levels(#[case] level: LogLevel, #[case] expected: Level) {
        assert_eq!(level.tracing_level(), expected);
    }
}
