//! Rated-recipe search: pagination plus an optional prep-time ceiling.

use crate::domain::recipe::RatedRecipe;
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{
    collect_form_fields, page_window, preptime_threshold,
};
use crate::transport::http::types::{AppState, SearchParams};
use axum::extract::{Query, Request, State};
use axum::Json;

#[utoipa::path(
    post,
    path = "/v1/search/recipes",
    params(
        ("count" = Option<String>, Query, description = "Page size; anything outside 1-10 becomes 10"),
        ("start" = Option<String>, Query, description = "Rows to skip; negative values become 0"),
        ("preptime" = Option<String>, Query, description = "Only recipes quicker than this many minutes; omit for no filter")
    ),
    responses(
        (status = 200, description = "Matching recipes with average ratings", body = [RatedRecipe])
    )
)]
pub async fn search_recipes_handler(
    State(state): State<AppState>,
    params: Option<Query<SearchParams>>,
    request: Request,
) -> Result<Json<Vec<RatedRecipe>>, ApiError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    // Form fields win over query parameters, field by field.
    let form = collect_form_fields(request).await;
    let count = form.get("count").map(String::as_str).or(params.count.as_deref());
    let start = form.get("start").map(String::as_str).or(params.start.as_deref());
    let preptime = form
        .get("preptime")
        .map(String::as_str)
        .or(params.preptime.as_deref());

    let window = page_window(count, start);
    let threshold = preptime_threshold(preptime);
    let recipes = state
        .store
        .fetch_rated_page(window.start, window.count, threshold)
        .await?;
    Ok(Json(recipes))
}
