use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `meals` table, serialized with its column names.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub title: String,
    pub created_at: String,
    pub is_in_diet: bool,
    // NULL for rows written before sessions existed
    pub session_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMeal {
    pub id: Uuid,
    pub title: String,
    pub created_at: String,
    pub is_in_diet: bool,
    pub session_id: String,
}

impl From<NewMeal> for Meal {
    fn from(n: NewMeal) -> Self {
        Self {
            id: n.id,
            title: n.title,
            created_at: n.created_at,
            is_in_diet: n.is_in_diet,
            session_id: Some(n.session_id),
        }
    }
}

/// Mutable columns written by an update. Ownership is never part of it.
#[derive(Debug, Clone)]
pub struct MealChanges {
    pub title: String,
    pub created_at: String,
    pub is_in_diet: bool,
}

impl Meal {
    pub fn apply(&mut self, changes: MealChanges) {
        self.title = changes.title;
        self.created_at = changes.created_at;
        self.is_in_diet = changes.is_in_diet;
    }
}
