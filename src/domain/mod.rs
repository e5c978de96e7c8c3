pub mod recipe;

pub use recipe::{RatedRecipe, Rating, RatingDraft, Recipe, RecipeDraft};
