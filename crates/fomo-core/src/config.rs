use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, SourceKind};
use crate::ConfigError;

pub const DEFAULT_PLACES_URL: &str = "https://example.com/places.json";
pub const DEFAULT_USER_AGENT: &str = "fomo/0.1 (trending-places)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("FOMO_ENV", "development"))?;
    let log_level = or_default("FOMO_LOG_LEVEL", "info");
    let source = parse_source_kind(&or_default("FOMO_SOURCE", "static"))?;
    let places_url = or_default("FOMO_PLACES_URL", DEFAULT_PLACES_URL);
    let places_path = lookup("FOMO_PLACES_PATH").ok().map(PathBuf::from);
    let http_timeout_secs = parse_u64("FOMO_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FOMO_USER_AGENT", DEFAULT_USER_AGENT);

    if source == SourceKind::File && places_path.is_none() {
        return Err(ConfigError::MissingEnvVar("FOMO_PLACES_PATH".to_string()));
    }

    Ok(AppConfig {
        env,
        log_level,
        source,
        places_url,
        places_path,
        http_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FOMO_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_source_kind(s: &str) -> Result<SourceKind, ConfigError> {
    match s {
        "static" => Ok(SourceKind::Static),
        "http" => Ok(SourceKind::Http),
        "file" => Ok(SourceKind::File),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FOMO_SOURCE".to_string(),
            reason: format!("expected static, http or file; got '{other}'"),
        }),
    }
}
