//! Environment variable parsing utilities.
//!
//! Every helper reads through a [`Lookup`] so configuration can be built from
//! the process environment or from a fixed map in tests.

use std::str::FromStr;
use std::time::Duration;

use super::ConfigError;

/// Source of configuration values, keyed by environment variable name.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Get variable with default value.
pub fn env_or(env: Lookup<'_>, key: &str, default: &str) -> String {
    env(key).unwrap_or_else(|| default.to_string())
}

/// Get optional variable (None if empty or missing).
pub fn env_opt(env: Lookup<'_>, key: &str) -> Option<String> {
    env(key).filter(|s| !s.is_empty())
}

/// Parse variable with type conversion.
pub fn env_parse<T: FromStr>(env: Lookup<'_>, key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env(key) {
        Some(v) if !v.is_empty() => v.parse().map_err(|e: T::Err| ConfigError::Parse {
            key: key.into(),
            value: v,
            error: e.to_string(),
        }),
        _ => Ok(default),
    }
}

/// Parse duration string (e.g., "500ms", "30s", "2m", "1h").
/// Returns None for "off" or "0".
pub fn parse_duration(s: &str) -> Result<Option<Duration>, String> {
    let s = s.trim().to_lowercase();

    if s == "off" || s == "0" || s.is_empty() {
        return Ok(None);
    }

    // "ms" must be checked before "s"
    let (num_str, unit) = if let Some(n) = s.strip_suffix("ms") {
        (n, "ms")
    } else if let Some(n) = s.strip_suffix('s') {
        (n, "s")
    } else if let Some(n) = s.strip_suffix('m') {
        (n, "m")
    } else if let Some(n) = s.strip_suffix('h') {
        (n, "h")
    } else {
        // Try parsing as seconds
        return s
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| format!("invalid duration: {}", s));
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    if num == 0 {
        return Ok(None);
    }

    let duration = match unit {
        "ms" => Duration::from_millis(num),
        "s" => Duration::from_secs(num),
        "m" => Duration::from_secs(num.checked_mul(60).ok_or("duration too large")?),
        "h" => Duration::from_secs(num.checked_mul(3600).ok_or("duration too large")?),
        _ => return Err(format!("invalid unit: {}", unit)),
    };

    Ok(Some(duration))
}

/// Parse variable as a mandatory timeout.
///
/// Unlike [`parse_duration`], "off" and "0" are rejected: every probe must be
/// bounded.
pub fn env_timeout(env: Lookup<'_>, key: &str, default: &str) -> Result<Duration, ConfigError> {
    let value = env_opt(env, key).unwrap_or_else(|| default.to_string());
    match parse_duration(&value) {
        Ok(Some(d)) => Ok(d),
        Ok(None) => Err(ConfigError::Invalid {
            key: key.into(),
            message: "timeout must be greater than zero".into(),
        }),
        Err(e) => Err(ConfigError::Parse {
            key: key.into(),
            value,
            error: e,
        }),
    }
}
