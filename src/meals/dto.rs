use serde::{Deserialize, Serialize};

use super::repo_types::{Meal, MealChanges};
use crate::error::AppError;

/// Body of both create and update: every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBody {
    pub title: String,
    pub is_in_diet: bool,
    pub created_at: String,
}

impl MealBody {
    pub fn validate(self) -> Result<MealChanges, AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation_with_details(
                "Invalid request body",
                "title must not be empty",
            ));
        }
        Ok(MealChanges {
            title: self.title,
            created_at: self.created_at,
            is_in_diet: self.is_in_diet,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

/// `meal` is `null` when nothing matched; that is still a 200.
#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Option<Meal>,
}

/// Either a positive count or the literal `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RegisteredCount {
    Count(usize),
    NotAvailable(&'static str),
}

impl From<usize> for RegisteredCount {
    fn from(n: usize) -> Self {
        if n == 0 {
            RegisteredCount::NotAvailable("N/A")
        } else {
            RegisteredCount::Count(n)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InDietSummary {
    pub registered_count: RegisteredCount,
    pub percentage_of_total: f64,
    pub meals_in_diet_registered: Vec<Meal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotInDietSummary {
    pub registered_count: RegisteredCount,
    pub percentage_of_total: f64,
    pub meals_not_in_diet_registered: Vec<Meal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals_registered: usize,
    pub meals_in_diet: InDietSummary,
    pub meals_not_in_diet: NotInDietSummary,
}
