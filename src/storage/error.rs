use thiserror::Error;

/// Failures surfaced by [`RecipeStore`](super::RecipeStore), classified once
/// so handlers can map them to status codes without matching on sqlx
/// internals.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No recipe matches the requested id. Also covers ratings aimed at a
    /// missing recipe: the schema's only foreign key points at `recipes.id`.
    #[error("Recipe not found")]
    NotFound,

    /// A uniqueness constraint was violated (duplicate recipe name).
    #[error(transparent)]
    Conflict(sqlx::Error),

    /// Any other database failure. The message is surfaced verbatim.
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return StoreError::NotFound;
        }
        if let sqlx::Error::Database(db) = &err {
            let kind = db.kind();
            return match kind {
                sqlx::error::ErrorKind::UniqueViolation => StoreError::Conflict(err),
                sqlx::error::ErrorKind::ForeignKeyViolation => StoreError::NotFound,
                _ => StoreError::Database(err),
            };
        }
        StoreError::Database(err)
    }
}
