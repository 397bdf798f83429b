use crate::app_config::{AppConfig, Environment};
use crate::geo::parse_radius_km;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_km = |var: &str| -> Result<Option<f64>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let km = parse_radius_km(raw).map_err(|reason| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        })?;
        Ok(Some(km))
    };

    let env = parse_environment(&or_default("MOTELFINDER_ENV", "development"))?;
    let log_level = or_default("MOTELFINDER_LOG_LEVEL", "info");
    let listings_path = PathBuf::from(or_default(
        "MOTELFINDER_LISTINGS_PATH",
        "./config/listings.yaml",
    ));
    let search_radius_km = parse_optional_km("MOTELFINDER_SEARCH_RADIUS_KM")?;

    let whatsapp_country_code = or_default("MOTELFINDER_WHATSAPP_COUNTRY_CODE", "55");
    if whatsapp_country_code.is_empty()
        || !whatsapp_country_code.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ConfigError::InvalidEnvVar {
            var: "MOTELFINDER_WHATSAPP_COUNTRY_CODE".to_string(),
            reason: format!("expected digits only, got '{whatsapp_country_code}'"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        listings_path,
        search_radius_km,
        whatsapp_country_code,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MOTELFINDER_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
