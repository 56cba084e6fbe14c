use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

use crate::error::AppError;

/// `Json<T>` whose rejections become 400 validation errors instead of axum's 422.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "invalid request body");
                Err(AppError::validation_with_details(
                    "Invalid request body",
                    rejection.body_text(),
                ))
            }
        }
    }
}

/// The `:id` path segment, which must be a UUID.
pub struct MealId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for MealId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<Uuid>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(MealId(id)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "invalid meal id");
                Err(AppError::validation_with_details(
                    "Invalid meal id",
                    rejection.body_text(),
                ))
            }
        }
    }
}
