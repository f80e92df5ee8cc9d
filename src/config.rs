//! App Configuration
//!
//! Values are baked in at build time (`GROCERY_*` variables seen by
//! `trunk build`), falling back to defaults.
//!
//! Loading happens before the logger exists (the log level is part of the
//! config), so fallbacks are returned as [`ConfigNotice`]s to be logged
//! once it is up.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn, Level};

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_RETRY_DELAY_MS: &str = "500";
const DEFAULT_SESSION_KEY: &str = "grocery.user";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the grocery API, without trailing slash
    pub api_url: String,
    /// Cosmetic pause before a user-initiated reload
    pub retry_delay: Duration,
    /// localStorage key holding the signed-in user
    pub session_key: String,
    pub log_level: Level,
}

/// Something worth logging about how a value was resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNotice {
    pub level: Level,
    pub message: String,
}

impl ConfigNotice {
    fn info(message: String) -> Self {
        Self { level: Level::INFO, message }
    }

    fn warn(message: String) -> Self {
        Self { level: Level::WARN, message }
    }

    pub fn log(&self) {
        if self.level == Level::WARN {
            warn!("{}", self.message);
        } else {
            info!("{}", self.message);
        }
    }
}

impl AppConfig {
    pub fn load() -> (Self, Vec<ConfigNotice>) {
        Self::from_values(
            option_env!("GROCERY_API_URL"),
            option_env!("GROCERY_RETRY_DELAY_MS"),
            option_env!("GROCERY_SESSION_KEY"),
            option_env!("GROCERY_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        retry_delay_ms: Option<&str>,
        session_key: Option<&str>,
        log_level: Option<&str>,
    ) -> (Self, Vec<ConfigNotice>) {
        let mut notices = Vec::new();
        let api_url: String = try_load("GROCERY_API_URL", api_url, DEFAULT_API_URL, &mut notices);
        let config = Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            retry_delay: Duration::from_millis(try_load(
                "GROCERY_RETRY_DELAY_MS",
                retry_delay_ms,
                DEFAULT_RETRY_DELAY_MS,
                &mut notices,
            )),
            session_key: try_load("GROCERY_SESSION_KEY", session_key, DEFAULT_SESSION_KEY, &mut notices),
            log_level: try_load("GROCERY_LOG_LEVEL", log_level, DEFAULT_LOG_LEVEL, &mut notices),
        };
        (config, notices)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None).0
    }
}

fn try_load<T: FromStr>(key: &str, value: Option<&str>, default: &str, notices: &mut Vec<ConfigNotice>) -> T
where
    T::Err: Display,
{
    let raw = value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
        notices.push(ConfigNotice::info(format!("{key} not set, using default: {default}")));
        default
    });
    raw.trim().parse().unwrap_or_else(|e| {
        notices.push(ConfigNotice::warn(format!(
            "Invalid {key} value {raw:?}: {e}, using default: {default}"
        )));
        parse_default(default)
    })
}

// Defaults above are known-good literals.
fn parse_default<T: FromStr>(default: &str) -> T
where
    T::Err: Display,
{
    match default.parse() {
        Ok(v) => v,
        Err(e) => panic!("bad built-in default {default:?}: {e}"),
    }
}
