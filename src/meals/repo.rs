use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Meal, NewMeal};

/// Storage seam for meal records. Every method is a single statement; callers
/// get no isolation across calls.
#[async_trait]
pub trait MealRepository: Send + Sync {
    async fn insert(&self, meal: NewMeal) -> anyhow::Result<Meal>;

    /// Meals owned by `session_id`, ordered by the bytes of `created_at`.
    async fn list_by_session(&self, session_id: &str) -> anyhow::Result<Vec<Meal>>;

    /// Looks a meal up by id, restricted to `owner` when one is given.
    async fn find(&self, id: Uuid, owner: Option<&str>) -> anyhow::Result<Option<Meal>>;

    /// Overwrites the mutable columns of the row with `meal.id`.
    async fn update(&self, meal: &Meal) -> anyhow::Result<()>;

    /// Returns the number of deleted rows.
    async fn delete(&self, id: Uuid, owner: Option<&str>) -> anyhow::Result<u64>;
}

// byte order, whatever the database locale
const LIST_BY_SESSION_SQL: &str = r#"
    SELECT id, title, created_at, is_in_diet, session_id
    FROM meals
    WHERE session_id = $1
    ORDER BY created_at COLLATE "C" ASC
"#;

#[derive(Clone)]
pub struct PgMealRepository {
    db: PgPool,
}

impl PgMealRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealRepository for PgMealRepository {
    async fn insert(&self, meal: NewMeal) -> anyhow::Result<Meal> {
        let row = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, title, created_at, is_in_diet, session_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, created_at, is_in_diet, session_id
            "#,
        )
        .bind(meal.id)
        .bind(&meal.title)
        .bind(&meal.created_at)
        .bind(meal.is_in_diet)
        .bind(&meal.session_id)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn list_by_session(&self, session_id: &str) -> anyhow::Result<Vec<Meal>> {
        let rows = sqlx::query_as::<_, Meal>(LIST_BY_SESSION_SQL)
        .bind(session_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid, owner: Option<&str>) -> anyhow::Result<Option<Meal>> {
        // NULL owner means "any session"
        let row = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, title, created_at, is_in_diet, session_id
            FROM meals
            WHERE id = $1 AND ($2::text IS NULL OR session_id = $2)
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, meal: &Meal) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE meals
            SET title = $2, created_at = $3, is_in_diet = $4
            WHERE id = $1
            "#,
        )
        .bind(meal.id)
        .bind(&meal.title)
        .bind(&meal.created_at)
        .bind(meal.is_in_diet)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid, owner: Option<&str>) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            DELETE FROM meals
            WHERE id = $1 AND ($2::text IS NULL OR session_id = $2)
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(&self.db)
        .await?;
        Ok(res.rows_affected())
    }
}
