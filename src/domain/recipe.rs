//! The recipe records and their write models.
//!
//! Wire field names are part of the public contract and never change:
//! `id`, `name`, `preptime`, `difficulty`, `vegetarian`, `avg_rating`,
//! `rating_id`, `recipe_id`, `rating`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored recipe. `id` is assigned by the database on creation and is
/// immutable afterwards; `name` is unique across the table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow, ToSchema)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    /// Preparation time in minutes.
    pub preptime: f64,
    /// Difficulty grade, 1 to 3 (a database CHECK enforces the range).
    pub difficulty: i16,
    pub vegetarian: bool,
}

/// A recipe together with the average of its ratings.
///
/// `avg_rating` is computed per query and never persisted; a recipe without
/// ratings averages to 0.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow, ToSchema)]
pub struct RatedRecipe {
    pub id: i64,
    pub name: String,
    pub preptime: f64,
    pub difficulty: i16,
    pub vegetarian: bool,
    pub avg_rating: f64,
}

/// One rating attached to a recipe. Ratings are append-only: they are never
/// updated or removed individually, only cascaded away when the owning
/// recipe is deleted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow, ToSchema)]
pub struct Rating {
    pub rating_id: i64,
    pub recipe_id: i64,
    /// Rating value, 1 to 5 (a database CHECK enforces the range).
    pub rating: i16,
}

/// Write model for create and update requests: a recipe without its id.
///
/// Missing fields decode to their type defaults instead of rejecting the
/// payload; defaults that fall outside a CHECK range (difficulty 0) are
/// caught by the database, not the handler.
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RecipeDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub preptime: f64,
    #[serde(default)]
    pub difficulty: i16,
    #[serde(default)]
    pub vegetarian: bool,
}

impl RecipeDraft {
    /// Materializes the draft as a full record under the given id.
    pub fn with_id(&self, id: i64) -> Recipe {
        Recipe {
            id,
            name: self.name.clone(),
            preptime: self.preptime,
            difficulty: self.difficulty,
            vegetarian: self.vegetarian,
        }
    }
}

/// Write model for rating submissions.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct RatingDraft {
    #[serde(default)]
    pub rating: i16,
}
