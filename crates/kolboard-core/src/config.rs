use crate::app_config::{AppConfig, CorsOrigins, Environment, DEV_ORIGINS};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
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
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("KOLBOARD_ENV", "development"))?;
    let bind_addr = parse_addr("KOLBOARD_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("KOLBOARD_LOG_LEVEL", "info");

    let seed = match lookup("KOLBOARD_SEED") {
        Ok(raw) => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|e| invalid("KOLBOARD_SEED", e.to_string()))?,
        ),
        Err(_) => None,
    };

    let profile_count = parse_usize("KOLBOARD_PROFILE_COUNT", "28")?;
    if profile_count == 0 {
        return Err(invalid("KOLBOARD_PROFILE_COUNT", "must be at least 1".into()));
    }
    let campaign_count = parse_usize("KOLBOARD_CAMPAIGN_COUNT", "6")?;
    let buzz_days = parse_u32("KOLBOARD_BUZZ_DAYS", "30")?;
    if buzz_days == 0 {
        return Err(invalid("KOLBOARD_BUZZ_DAYS", "must be at least 1".into()));
    }

    let allowed_origins = resolve_origins(lookup("KOLBOARD_ALLOWED_ORIGINS").ok(), &env);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        seed,
        profile_count,
        campaign_count,
        buzz_days,
        allowed_origins,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "KOLBOARD_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// Explicit origins win; production without a list opens CORS to any origin;
/// everything else gets the local dev servers.
fn resolve_origins(raw: Option<String>, env: &Environment) -> CorsOrigins {
    let explicit: Vec<String> = raw
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if explicit.iter().any(|o| o == "*") {
        return CorsOrigins::Any;
    }
    if !explicit.is_empty() {
        return CorsOrigins::List(explicit);
    }
    if *env == Environment::Production {
        return CorsOrigins::Any;
    }
    CorsOrigins::List(DEV_ORIGINS.iter().map(|o| (*o).to_string()).collect())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
