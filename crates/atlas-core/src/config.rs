use thiserror::Error;
use url::Url;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Reads the storefront configuration, loading a `.env` file first if one
/// exists.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Reads the storefront configuration from the process environment only.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Every `ATLAS_*` variable is optional; unset ones take their defaults.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let timeout_raw = or_default("ATLAS_REQUEST_TIMEOUT_SECS", "30");
    let request_timeout_secs = timeout_raw.trim().parse::<u64>().map_err(|e| {
        ConfigError::InvalidEnvVar {
            var: "ATLAS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: format!("\"{timeout_raw}\": {e}"),
        }
    })?;

    let env = parse_environment(&or_default("ATLAS_ENV", "development"));
    let log_level = or_default("ATLAS_LOG_LEVEL", "info");

    let api_base_url = parse_base_url(
        "ATLAS_API_BASE_URL",
        &or_default("ATLAS_API_BASE_URL", "https://api.atlasmode.shop/v1"),
    )?;

    let api_version = or_default("ATLAS_API_VERSION", "new2");
    if api_version.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "ATLAS_API_VERSION".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let user_agent = or_default("ATLAS_USER_AGENT", "atlas-storefront/0.1");

    Ok(AppConfig {
        env,
        log_level,
        api_base_url,
        api_version,
        request_timeout_secs,
        user_agent,
    })
}

/// Case-insensitive; anything unrecognized is development.
fn parse_environment(raw: &str) -> Environment {
    match raw.trim().to_ascii_lowercase().as_str() {
        "production" | "prod" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Validates an API base URL and strips trailing slashes.
///
/// Uses the same parser as the HTTP client, so a URL accepted here is one
/// the client can build requests on.
fn parse_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(format!("\"{raw}\": {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("\"{raw}\" is not an http(s) URL")));
    }
    if !url.has_host() || url.cannot_be_a_base() {
        return Err(invalid(format!("\"{raw}\" has no host")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
