pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::recipe::{RatedRecipe, Rating, RatingDraft, Recipe, RecipeDraft};
pub use infra::config::Config;
pub use storage::{RecipeStore, StoreError};
