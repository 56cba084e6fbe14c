use anyhow::Context;
use serde::Deserialize;

const DEFAULT_SESSION_TTL_DAYS: i64 = 7;
const MAX_SESSION_TTL_DAYS: i64 = 3650;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub ttl_days: i64,
}

impl SessionConfig {
    pub fn max_age(&self) -> time::Duration {
        time::Duration::days(self.ttl_days)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub session: SessionConfig,
    /// Filter update/delete by the caller's session as well as by id.
    pub strict_ownership: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self {
            database_url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS").unwrap_or(10),
            session: SessionConfig {
                ttl_days: session_ttl_days(parse_var("SESSION_TTL_DAYS")),
            },
            strict_ownership: std::env::var("MEALS_STRICT_OWNERSHIP")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

/// Out-of-range values fall back to the default so `max_age` stays positive and finite.
fn session_ttl_days(raw: Option<i64>) -> i64 {
    match raw {
        Some(days) if (1..=MAX_SESSION_TTL_DAYS).contains(&days) => days,
        Some(days) => {
            tracing::warn!(days, "SESSION_TTL_DAYS out of range, using default");
            DEFAULT_SESSION_TTL_DAYS
        }
        None => DEFAULT_SESSION_TTL_DAYS,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
