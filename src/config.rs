use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::JournalError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // API
    pub api_url: String,
    pub request_timeout_secs: u64,

    // Credentials. A token wins over email/password.
    pub token: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,

    // Week grouping is computed in this zone
    pub timezone: Tz,

    // Dashboard
    pub recent_trades: usize,

    // Logging
    pub log_level: String,

    /// Set when `JOURNAL_TIMEZONE` was unreadable and `timezone` fell back
    /// to UTC. Config loads before logging starts, so the caller reports it.
    #[serde(skip)]
    pub timezone_error: Option<JournalError>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };
        let optional = |key: &str| -> Option<String> {
            lookup(key).filter(|v| !v.trim().is_empty())
        };

        let tz_name = env("JOURNAL_TIMEZONE", "UTC");
        let (timezone, timezone_error) = match parse_timezone(&tz_name) {
            Ok(tz) => (tz, None),
            Err(e) => (Tz::UTC, Some(e)),
        };

        Config {
            api_url: env("JOURNAL_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            request_timeout_secs: env("JOURNAL_TIMEOUT_SECS", "15").parse().unwrap_or(15),
            token: optional("JOURNAL_TOKEN"),
            email: optional("JOURNAL_EMAIL"),
            password: optional("JOURNAL_PASSWORD"),
            timezone,
            recent_trades: env("JOURNAL_RECENT_TRADES", "8").parse().unwrap_or(8),
            log_level: env("LOG_LEVEL", "INFO"),
            timezone_error,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 15,
            token: None,
            email: None,
            password: None,
            timezone: Tz::UTC,
            recent_trades: 8,
            log_level: "INFO".to_string(),
            timezone_error: None,
        }
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, JournalError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| JournalError::UnknownTimezone(name.to_string()))
}
