use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use super::read_session_cookie;
use crate::error::AppError;

/// Guard for routes that need an existing session. Yields the cookie value as
/// sent, so an empty `sessionId=` still passes the guard.
pub struct RequireSession(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match read_session_cookie(&parts.headers) {
            Some(id) => Ok(RequireSession(id)),
            None => {
                warn!(uri = %parts.uri, "request without sessionId cookie");
                Err(AppError::Unauthorized)
            }
        }
    }
}

/// Session for routes that mint one when absent. Empty values count as absent.
pub struct OptionalSession(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = read_session_cookie(&parts.headers).filter(|v| !v.is_empty());
        Ok(OptionalSession(id))
    }
}
