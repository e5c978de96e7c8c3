use crate::domain::recipe::{RatedRecipe, Rating, RatingDraft, Recipe, RecipeDraft};
use crate::transport::http::auth::require_basic_auth;
use crate::transport::http::handlers::{health, ratings, recipes, search};
use crate::transport::http::types::{AppState, DeleteConfirmation, ErrorBody, HealthStatus};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        recipes::list_recipes_handler,
        recipes::get_recipe_handler,
        recipes::create_recipe_handler,
        recipes::update_recipe_handler,
        recipes::delete_recipe_handler,
        ratings::rate_recipe_handler,
        search::search_recipes_handler
    ),
    components(schemas(
        Recipe,
        RecipeDraft,
        RatedRecipe,
        Rating,
        RatingDraft,
        HealthStatus,
        DeleteConfirmation,
        ErrorBody
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/v1/recipes", get(recipes::list_recipes_handler))
        .route("/v1/recipes/:id", get(recipes::get_recipe_handler))
        .route("/v1/recipes/:id/rating", post(ratings::rate_recipe_handler))
        .route("/v1/search/recipes", post(search::search_recipes_handler));

    // Mutations sit behind the basic-auth gate. route_layer (rather than
    // layer) keeps the gate off the public routes merged in below and off
    // the 404 fallback.
    let protected = Router::new()
        .route("/v1/recipes", post(recipes::create_recipe_handler))
        .route(
            "/v1/recipes/:id",
            put(recipes::update_recipe_handler)
                .patch(recipes::update_recipe_handler)
                .delete(recipes::delete_recipe_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_basic_auth,
        ));

    public
        .merge(protected)
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        ))
        .with_state(app_state)
}
