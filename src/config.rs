//! # CLI Configuration
//!
//! Process settings loaded from environment variables. Manifest content always
//! comes from files; only the ambient behaviour of the binaries is tunable here.

/// Settings shared by the `ocmlogctl` and `crdgen` binaries
///
/// All settings have defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    /// Ignored when `RUST_LOG` is set
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Enable color in text format logs
    pub log_enable_color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
            log_format: "text".to_string(),
            log_enable_color: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env_var_or_default_str("LOG_LEVEL", "INFO"),
            log_format: env_var_or_default_str("LOG_FORMAT", "text"),
            log_enable_color: env_var_or_default_bool("LOG_ENABLE_COLOR", false),
        }
    }

    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |v| parse_bool(&v))
}

fn parse_bool(value: &str) -> bool {
    let v_lower = value.to_lowercase();
    v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
