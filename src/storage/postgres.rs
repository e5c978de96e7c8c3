//! Postgres persistence for recipes and their ratings.
//!
//! All SQL lives here; handlers never touch the pool directly. Statements
//! are parameterized throughout and every sqlx failure funnels through the
//! [`StoreError`] classification.

use crate::domain::recipe::{RatedRecipe, Rating, Recipe, RecipeDraft};
use crate::storage::error::StoreError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Handle to the recipe tables. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct RecipeStore {
    pool: PgPool,
}

impl RecipeStore {
    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wraps an existing pool. The integration tests use this to share one
    /// pool between the server under test and their own setup queries.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Liveness probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn fetch_one(&self, id: i64) -> Result<Recipe, StoreError> {
        let recipe = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, preptime, difficulty, vegetarian FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)?;
        Ok(recipe)
    }

    /// A page of recipes in storage order: `start` rows skipped, at most
    /// `count` returned. An empty page is not an error.
    pub async fn fetch_page(&self, start: i64, count: i64) -> Result<Vec<Recipe>, StoreError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, preptime, difficulty, vegetarian FROM recipes LIMIT $1 OFFSET $2",
        )
        .bind(count)
        .bind(start)
        .fetch_all(&self.pool)
        .await?;
        Ok(recipes)
    }

    /// Inserts a draft and returns the stored row with its assigned id.
    pub async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        let recipe = sqlx::query_as::<_, Recipe>(
            "INSERT INTO recipes (name, preptime, difficulty, vegetarian) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, preptime, difficulty, vegetarian",
        )
        .bind(&draft.name)
        .bind(draft.preptime)
        .bind(draft.difficulty)
        .bind(draft.vegetarian)
        .fetch_one(&self.pool)
        .await?;
        Ok(recipe)
    }

    /// Full replace of every mutable column. Returns the number of matched
    /// rows so the caller can turn zero into a not-found response.
    pub async fn update(&self, id: i64, draft: &RecipeDraft) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE recipes SET name = $1, preptime = $2, difficulty = $3, vegetarian = $4 \
             WHERE id = $5",
        )
        .bind(&draft.name)
        .bind(draft.preptime)
        .bind(draft.difficulty)
        .bind(draft.vegetarian)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a recipe; its ratings go with it (ON DELETE CASCADE). Returns
    /// the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Appends a rating to a recipe. A foreign-key violation (no such
    /// recipe) comes back as [`StoreError::NotFound`].
    pub async fn add_rating(&self, recipe_id: i64, rating: i16) -> Result<Rating, StoreError> {
        let rating = sqlx::query_as::<_, Rating>(
            "INSERT INTO recipe_ratings (recipe_id, rating) VALUES ($1, $2) \
             RETURNING rating_id, recipe_id, rating",
        )
        .bind(recipe_id)
        .bind(rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(rating)
    }

    /// A page of recipes strictly quicker to prepare than `max_preptime`,
    /// each carrying the average of its ratings (0 when unrated). The
    /// aggregate is cast to float8 so it decodes as f64 rather than numeric.
    pub async fn fetch_rated_page(
        &self,
        start: i64,
        count: i64,
        max_preptime: f64,
    ) -> Result<Vec<RatedRecipe>, StoreError> {
        let recipes = sqlx::query_as::<_, RatedRecipe>(
            "SELECT id, name, preptime, difficulty, vegetarian, \
             (SELECT COALESCE(AVG(rating), 0) FROM recipe_ratings WHERE recipe_id = recipes.id)::float8 AS avg_rating \
             FROM recipes WHERE preptime < $1 LIMIT $2 OFFSET $3",
        )
        .bind(max_preptime)
        .bind(count)
        .bind(start)
        .fetch_all(&self.pool)
        .await?;
        Ok(recipes)
    }
}
