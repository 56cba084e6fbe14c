//! Anonymous sessions carried by the `sessionId` cookie.
//!
//! There is no server-side session table: the cookie value is only an ownership
//! tag compared against `meals.session_id`.

pub mod extractors;

use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "sessionId";

/// Returns the raw value of the `sessionId` cookie, which may be empty.
pub fn read_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

pub fn mint_session_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn session_cookie(session_id: &str, max_age: time::Duration) -> anyhow::Result<HeaderValue> {
    let cookie = format!(
        "{}={}; Path=/; Max-Age={}",
        SESSION_COOKIE,
        session_id,
        max_age.whole_seconds()
    );
    Ok(HeaderValue::from_str(&cookie)?)
}
