pub mod error;
pub mod postgres;

pub use error::StoreError;
pub use postgres::RecipeStore;
