use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{InDietSummary, MealMetrics, NotInDietSummary, RegisteredCount};
use super::repo::MealRepository;
use super::repo_types::{Meal, MealChanges, NewMeal};
use crate::error::AppError;

pub async fn create_meal(
    repo: &dyn MealRepository,
    session_id: &str,
    changes: MealChanges,
) -> Result<Meal, AppError> {
    let meal = repo
        .insert(NewMeal {
            id: Uuid::new_v4(),
            title: changes.title,
            created_at: changes.created_at,
            is_in_diet: changes.is_in_diet,
            session_id: session_id.to_string(),
        })
        .await?;
    info!(meal_id = %meal.id, "meal created");
    Ok(meal)
}

pub async fn list_meals(repo: &dyn MealRepository, session_id: &str) -> Result<Vec<Meal>, AppError> {
    if session_id.trim().is_empty() {
        warn!("empty sessionId cookie on list");
        return Err(AppError::InvalidSession);
    }
    Ok(repo.list_by_session(session_id).await?)
}

pub async fn get_meal(
    repo: &dyn MealRepository,
    session_id: &str,
    id: Uuid,
) -> Result<Option<Meal>, AppError> {
    Ok(repo.find(id, Some(session_id)).await?)
}

/// Deleting a missing (or, with `owner`, foreign) meal is not an error.
pub async fn delete_meal(
    repo: &dyn MealRepository,
    id: Uuid,
    owner: Option<&str>,
) -> Result<(), AppError> {
    let deleted = repo.delete(id, owner).await?;
    info!(meal_id = %id, deleted, "meal delete");
    Ok(())
}

/// Read-then-write with no isolation; the last writer wins.
pub async fn update_meal(
    repo: &dyn MealRepository,
    id: Uuid,
    owner: Option<&str>,
    changes: MealChanges,
) -> Result<Meal, AppError> {
    let Some(mut meal) = repo.find(id, owner).await? else {
        warn!(meal_id = %id, "update of unknown meal");
        return Err(AppError::NotFound("Meal not found".into()));
    };
    meal.apply(changes);
    repo.update(&meal).await?;
    info!(meal_id = %id, "meal updated");
    Ok(meal)
}

pub fn compute_metrics(meals: Vec<Meal>) -> MealMetrics {
    let total = meals.len();
    let (in_diet, not_in_diet): (Vec<Meal>, Vec<Meal>) =
        meals.into_iter().partition(|m| m.is_in_diet);

    MealMetrics {
        total_meals_registered: total,
        meals_in_diet: InDietSummary {
            registered_count: RegisteredCount::from(in_diet.len()),
            percentage_of_total: percentage(in_diet.len(), total),
            meals_in_diet_registered: in_diet,
        },
        meals_not_in_diet: NotInDietSummary {
            registered_count: RegisteredCount::from(not_in_diet.len()),
            percentage_of_total: percentage(not_in_diet.len(), total),
            meals_not_in_diet_registered: not_in_diet,
        },
    }
}

/// Share of `total` rounded to two decimals; 0 when there is nothing to share.
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 * 100.0 / total as f64;
    (raw * 100.0).round() / 100.0
}
