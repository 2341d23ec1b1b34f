use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable is optional; unset variables take the defaults of
/// [`AppConfig::default`].
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_base_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        validate_base_url(&raw).map_err(|reason| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        })
    };

    let log_level = or_default("COURTSIDE_LOG_LEVEL", &defaults.log_level);
    let request_timeout_secs =
        parse_u64("COURTSIDE_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    let user_agent = or_default("COURTSIDE_USER_AGENT", &defaults.user_agent);
    let max_retries = parse_u32("COURTSIDE_MAX_RETRIES", defaults.max_retries)?;
    let retry_backoff_base_secs = parse_u64(
        "COURTSIDE_RETRY_BACKOFF_BASE_SECS",
        defaults.retry_backoff_base_secs,
    )?;
    let atp_base_url = parse_base_url("COURTSIDE_ATP_BASE_URL", &defaults.atp_base_url)?;
    let wta_base_url = parse_base_url("COURTSIDE_WTA_BASE_URL", &defaults.wta_base_url)?;

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        atp_base_url,
        wta_base_url,
    })
}

/// Checks that `raw` looks like an absolute http(s) origin and strips any
/// trailing slash, since site paths are appended by concatenation.
fn validate_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| format!("\"{raw}\" is not an absolute http(s) URL"))?;
    if rest.is_empty() {
        return Err(format!("\"{raw}\" has no host"));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
