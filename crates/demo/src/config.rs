//! Demo configuration loaded from environment variables.

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DECLINE_CHARGES` — set to `"true"`/`"1"` to make the in-memory
///   processor decline every charge, exercising the gateway-failure path
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub decline_charges: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            decline_charges: std::env::var("DECLINE_CHARGES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            decline_charges: false,
        }
    }
}
