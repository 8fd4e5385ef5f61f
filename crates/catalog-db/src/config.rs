//! Environment configuration for the connection pool.
//!
//! Every setting has a development default, so an empty environment connects
//! to a local `productapp` database.
//!
//! | Variable                     | Default      |
//! |------------------------------|--------------|
//! | `CATALOG_DB_HOST`            | `localhost`  |
//! | `CATALOG_DB_PORT`            | `5432`       |
//! | `CATALOG_DB_NAME`            | `productapp` |
//! | `CATALOG_DB_USER`            | `postgres`   |
//! | `CATALOG_DB_PASSWORD`        | (empty)      |
//! | `CATALOG_DB_MAX_CONNECTIONS` | `5`          |
//! | `CATALOG_DB_MAX_IDLE_TIME`   | `30s`        |

use std::env;
use std::time::Duration;

use crate::pool::DbConfig;

pub const ENV_HOST: &str = "CATALOG_DB_HOST";
pub const ENV_PORT: &str = "CATALOG_DB_PORT";
pub const ENV_NAME: &str = "CATALOG_DB_NAME";
pub const ENV_USER: &str = "CATALOG_DB_USER";
pub const ENV_PASSWORD: &str = "CATALOG_DB_PASSWORD";
pub const ENV_MAX_CONNECTIONS: &str = "CATALOG_DB_MAX_CONNECTIONS";
pub const ENV_MAX_IDLE_TIME: &str = "CATALOG_DB_MAX_IDLE_TIME";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid duration '{0}': expected a number followed by ms, s, m or h")]
    InvalidDuration(String),
}

impl DbConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key lookup.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = get(ENV_PORT, "5432")
            .parse()
            .map_err(|_| ConfigError::InvalidValue(ENV_PORT.to_string()))?;

        let max_connections: u32 = get(ENV_MAX_CONNECTIONS, "5")
            .parse()
            .map_err(|_| ConfigError::InvalidValue(ENV_MAX_CONNECTIONS.to_string()))?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue(ENV_MAX_CONNECTIONS.to_string()));
        }

        let max_idle_time = parse_duration(&get(ENV_MAX_IDLE_TIME, "30s"))?;

        let config = DbConfig::new(get(ENV_HOST, "localhost"), get(ENV_NAME, "productapp"))
            .port(port)
            .credentials(get(ENV_USER, "postgres"), get(ENV_PASSWORD, ""))
            .max_connections(max_connections)
            .max_idle_time(Some(max_idle_time));

        Ok(config)
    }
}

/// Parses durations written as `<number><unit>`, e.g. `250ms`, `30s`, `5m`, `1h`.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    let input = input.trim();
    let invalid = || ConfigError::InvalidDuration(input.to_string());

    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (amount, unit) = input.split_at(split);
    let amount: u64 = amount.parse().map_err(|_| invalid())?;

    let duration = match unit {
        "ms" => Duration::from_millis(amount),
        "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(amount.checked_mul(60).ok_or_else(invalid)?),
        "h" => Duration::from_secs(amount.checked_mul(60 * 60).ok_or_else(invalid)?),
        _ => return Err(invalid()),
    };

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DbConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "productapp");
        assert_eq!(config.username, "postgres");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.max_idle_time, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_overrides() {
        let config = DbConfig::from_lookup(lookup(&[
            (ENV_HOST, "db.internal"),
            (ENV_PORT, "6432"),
            (ENV_PASSWORD, "585858"),
            (ENV_MAX_CONNECTIONS, "20"),
            (ENV_MAX_IDLE_TIME, "5m"),
        ]))
        .unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6432);
        assert_eq!(config.password, "585858");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.max_idle_time, Some(Duration::from_secs(300)));
    }

    #[test]
    fn test_invalid_values() {
        let err = DbConfig::from_lookup(lookup(&[(ENV_PORT, "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == ENV_PORT));

        let err = DbConfig::from_lookup(lookup(&[(ENV_MAX_CONNECTIONS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = DbConfig::from_lookup(lookup(&[(ENV_MAX_IDLE_TIME, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration(_)));
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration(" 2m ").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));

        assert!(parse_duration("30").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("10d").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_parse_duration_overflow() {
        let err = parse_duration("6000000000000000h").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration(ref s) if s == "6000000000000000h"));

        assert!(matches!(
            parse_duration("400000000000000000m"),
            Err(ConfigError::InvalidDuration(_))
        ));

        let err = DbConfig::from_lookup(lookup(&[(ENV_MAX_IDLE_TIME, "6000000000000000h")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration(_)));
    }
}
