use crate::app_config::{AppConfig, Environment, ExtractStrategy};
use crate::ConfigError;

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
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let gemini_api_key = require("GEMINI_API_KEY")?;

    let env = parse_environment(&or_default("PROSPECTOR_ENV", "development"))?;
    let bind_addr = parse_addr("PROSPECTOR_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PROSPECTOR_LOG_LEVEL", "info");

    let gemini_model = or_default("PROSPECTOR_GEMINI_MODEL", "gemini-2.5-flash");
    let gemini_base_url = or_default(
        "PROSPECTOR_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com",
    );
    let gemini_timeout_secs = parse_u64("PROSPECTOR_GEMINI_TIMEOUT_SECS", "120")?;
    let maps_grounding = parse_bool(
        "PROSPECTOR_MAPS_GROUNDING",
        &or_default("PROSPECTOR_MAPS_GROUNDING", "true"),
    )?;
    let extract_strategy =
        parse_extract_strategy(&or_default("PROSPECTOR_EXTRACT_STRATEGY", "bracket-span"))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        gemini_timeout_secs,
        maps_grounding,
        extract_strategy,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PROSPECTOR_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

fn parse_extract_strategy(s: &str) -> Result<ExtractStrategy, ConfigError> {
    match s {
        "bracket-span" => Ok(ExtractStrategy::BracketSpan),
        "balanced" => Ok(ExtractStrategy::BalancedArray),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PROSPECTOR_EXTRACT_STRATEGY".to_string(),
            reason: format!("expected bracket-span or balanced; got '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
