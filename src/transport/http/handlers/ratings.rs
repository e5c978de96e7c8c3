use crate::domain::recipe::{Rating, RatingDraft};
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::parse_recipe_id;
use crate::transport::http::types::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/v1/recipes/{id}/rating",
    params(
        ("id" = String, Path, description = "Recipe to rate")
    ),
    request_body = RatingDraft,
    responses(
        (status = 201, description = "Rating recorded", body = Rating),
        (status = 400, description = "Bad id or malformed body", body = ErrorBody),
        (status = 404, description = "No recipe under that id", body = ErrorBody)
    )
)]
pub async fn rate_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RatingDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Rating>), ApiError> {
    let recipe_id = parse_recipe_id(&id)?;
    let Json(draft) = body.map_err(|_| ApiError::InvalidPayload)?;
    let rating = state.store.add_rating(recipe_id, draft.rating).await?;
    Ok((StatusCode::CREATED, Json(rating)))
}
