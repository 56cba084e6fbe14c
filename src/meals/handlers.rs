use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{MealBody, MealListResponse, MealMetrics, MealResponse};
use super::extractors::{MealId, ValidJson};
use super::services;
use crate::{
    error::AppError,
    session::{
        extractors::{OptionalSession, RequireSession},
        mint_session_id, session_cookie,
    },
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(create_meal))
        .route("/metrics", get(get_metrics))
        .route("/:id", get(get_meal).put(update_meal).delete(delete_meal))
}

/// POST /meals — mints a session cookie when the caller has none.
#[instrument(skip(state, body, session))]
pub async fn create_meal(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    ValidJson(body): ValidJson<MealBody>,
) -> Result<(StatusCode, HeaderMap), AppError> {
    let changes = body.validate()?;

    let mut headers = HeaderMap::new();
    let session_id = match session {
        Some(id) => id,
        None => {
            let id = mint_session_id();
            headers.insert(
                header::SET_COOKIE,
                session_cookie(&id, state.config.session.max_age())?,
            );
            info!("session minted");
            id
        }
    };

    services::create_meal(state.meals.as_ref(), &session_id, changes).await?;
    Ok((StatusCode::CREATED, headers))
}

#[instrument(skip_all)]
pub async fn list_meals(
    State(state): State<AppState>,
    RequireSession(session_id): RequireSession,
) -> Result<Json<MealListResponse>, AppError> {
    let meals = services::list_meals(state.meals.as_ref(), &session_id).await?;
    Ok(Json(MealListResponse { meals }))
}

#[instrument(skip(state, session_id))]
pub async fn get_meal(
    State(state): State<AppState>,
    RequireSession(session_id): RequireSession,
    MealId(id): MealId,
) -> Result<Json<MealResponse>, AppError> {
    let meal = services::get_meal(state.meals.as_ref(), &session_id, id).await?;
    Ok(Json(MealResponse { meal }))
}

#[instrument(skip_all)]
pub async fn get_metrics(
    State(state): State<AppState>,
    RequireSession(session_id): RequireSession,
) -> Result<Json<MealMetrics>, AppError> {
    let meals = state.meals.list_by_session(&session_id).await?;
    Ok(Json(services::compute_metrics(meals)))
}

#[instrument(skip(state, session_id, body))]
pub async fn update_meal(
    State(state): State<AppState>,
    RequireSession(session_id): RequireSession,
    MealId(id): MealId,
    ValidJson(body): ValidJson<MealBody>,
) -> Result<Json<MealResponse>, AppError> {
    let changes = body.validate()?;
    let owner = state.config.strict_ownership.then_some(session_id.as_str());
    let meal = services::update_meal(state.meals.as_ref(), id, owner, changes).await?;
    Ok(Json(MealResponse { meal: Some(meal) }))
}

#[instrument(skip(state, session_id))]
pub async fn delete_meal(
    State(state): State<AppState>,
    RequireSession(session_id): RequireSession,
    MealId(id): MealId,
) -> Result<StatusCode, AppError> {
    let owner = state.config.strict_ownership.then_some(session_id.as_str());
    services::delete_meal(state.meals.as_ref(), id, owner).await?;
    Ok(StatusCode::OK)
}
