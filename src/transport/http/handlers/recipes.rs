//! CRUD handlers for the recipe collection.
//!
//! Ids arrive as raw path strings so a non-numeric id produces this API's
//! own 400 envelope instead of the framework rejection. Bodies are decoded
//! through `Result<Json<..>, JsonRejection>` for the same reason.

use crate::domain::recipe::{Recipe, RecipeDraft};
use crate::storage::StoreError;
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{page_window, parse_recipe_id};
use crate::transport::http::types::{AppState, DeleteConfirmation, PageParams};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/v1/recipes",
    params(
        ("count" = Option<String>, Query, description = "Page size; anything outside 1-10 becomes 10"),
        ("start" = Option<String>, Query, description = "Rows to skip; negative values become 0")
    ),
    responses(
        (status = 200, description = "A page of recipes", body = [Recipe])
    )
)]
pub async fn list_recipes_handler(
    State(state): State<AppState>,
    params: Option<Query<PageParams>>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    // An undecodable query string (a repeated key) degrades to the defaults.
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let window = page_window(params.count.as_deref(), params.start.as_deref());
    let recipes = state.store.fetch_page(window.start, window.count).await?;
    Ok(Json(recipes))
}

#[utoipa::path(
    get,
    path = "/v1/recipes/{id}",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No recipe under that id", body = ErrorBody)
    )
)]
pub async fn get_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_recipe_id(&id)?;
    let recipe = state.store.fetch_one(id).await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    post,
    path = "/v1/recipes",
    request_body = RecipeDraft,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 401, description = "Missing or wrong credentials", body = ErrorBody),
        (status = 409, description = "A recipe with that name already exists", body = ErrorBody)
    )
)]
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    body: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let Json(draft) = body.map_err(|_| ApiError::InvalidPayload)?;
    let created = state.store.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/v1/recipes/{id}",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "Recipe replaced", body = Recipe),
        (status = 400, description = "Bad id or malformed body", body = ErrorBody),
        (status = 401, description = "Missing or wrong credentials", body = ErrorBody),
        (status = 404, description = "No recipe under that id", body = ErrorBody)
    )
)]
pub async fn update_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_recipe_id(&id)?;
    let Json(draft) = body.map_err(|_| ApiError::InvalidPayload)?;
    if state.store.update(id, &draft).await? == 0 {
        return Err(StoreError::NotFound.into());
    }
    Ok(Json(draft.with_id(id)))
}

#[utoipa::path(
    delete,
    path = "/v1/recipes/{id}",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe deleted (ratings cascade)", body = DeleteConfirmation),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 401, description = "Missing or wrong credentials", body = ErrorBody),
        (status = 404, description = "No recipe under that id", body = ErrorBody)
    )
)]
pub async fn delete_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = parse_recipe_id(&id)?;
    if state.store.delete(id).await? == 0 {
        return Err(StoreError::NotFound.into());
    }
    Ok(Json(DeleteConfirmation::default()))
}
