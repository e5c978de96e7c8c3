#![allow(dead_code)]

//! Shared scaffolding for the integration tests.
//!
//! The DB-backed suites need a reachable Postgres described by the usual
//! `POSTGRES_*` variables (a local `.env` works). When those are missing the
//! suites skip themselves with a notice instead of failing.

use recipes_api::transport::http::auth::BasicCredentials;
use recipes_api::transport::http::AppState;
use recipes_api::RecipeStore;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::sync::Arc;

pub const TEST_AUTH_USER: &str = "admin";
pub const TEST_AUTH_PASSWORD: &str = "broccoli";

/// Assembles the connection string from the `POSTGRES_*` variables, or
/// `None` when any of them is missing.
pub fn database_url_from_env() -> Option<String> {
    let host = env::var("POSTGRES_HOST").ok()?;
    let user = env::var("POSTGRES_USER").ok()?;
    let password = env::var("POSTGRES_PASSWORD").ok()?;
    let db = env::var("POSTGRES_DB").ok()?;
    Some(format!(
        "postgres://{}:{}@{}/{}?sslmode=disable",
        user, password, host, db
    ))
}

pub async fn connect(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .expect("failed to connect to the test database")
}

/// Creates the two tables the API reads and writes. The server itself never
/// issues DDL; the tests own their schema.
pub async fn ensure_tables(pool: &PgPool) {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS recipes (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            preptime DOUBLE PRECISION NOT NULL DEFAULT 0.0,
            difficulty SMALLINT NOT NULL DEFAULT 1 CHECK (difficulty > 0 AND difficulty < 4),
            vegetarian BOOLEAN NOT NULL DEFAULT false
        )",
    )
    .execute(pool)
    .await
    .expect("failed to create recipes table");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS recipe_ratings (
            recipe_id BIGINT NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            rating_id BIGSERIAL,
            rating SMALLINT NOT NULL CHECK (rating > 0 AND rating < 6),
            PRIMARY KEY (recipe_id, rating_id)
        )",
    )
    .execute(pool)
    .await
    .expect("failed to create recipe_ratings table");
}

/// Empties both tables and restarts the id sequences so every run starts
/// from id 1.
pub async fn clear_tables(pool: &PgPool) {
    sqlx::query("DELETE FROM recipe_ratings")
        .execute(pool)
        .await
        .expect("failed to clear recipe_ratings");
    sqlx::query("DELETE FROM recipes")
        .execute(pool)
        .await
        .expect("failed to clear recipes");
    sqlx::query("ALTER SEQUENCE recipes_id_seq RESTART WITH 1")
        .execute(pool)
        .await
        .expect("failed to restart recipes_id_seq");
    sqlx::query("ALTER SEQUENCE recipe_ratings_rating_id_seq RESTART WITH 1")
        .execute(pool)
        .await
        .expect("failed to restart recipe_ratings_rating_id_seq");
}

/// Spawns the router on an ephemeral port and returns its base URL.
pub async fn spawn_server(pool: PgPool) -> String {
    let app_state = AppState {
        store: RecipeStore::with_pool(pool),
        auth: Arc::new(BasicCredentials {
            username: TEST_AUTH_USER.to_string(),
            password: TEST_AUTH_PASSWORD.to_string(),
        }),
    };
    let router = recipes_api::transport::http::create_router(app_state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let port = listener
        .local_addr()
        .expect("listener has no local address")
        .port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Inserts `n` recipes named "Recipe 0" .. "Recipe n-1" with rising prep
/// times (10, 20, ...) and cycling difficulty.
pub async fn seed_recipes(pool: &PgPool, n: i64) {
    for i in 0..n {
        sqlx::query(
            "INSERT INTO recipes (name, preptime, difficulty, vegetarian) VALUES ($1, $2, $3, $4)",
        )
        .bind(format!("Recipe {}", i))
        .bind(((i + 1) * 10) as f64)
        .bind((i % 3 + 1) as i16)
        .bind(true)
        .execute(pool)
        .await
        .expect("failed to seed recipe");
    }
}

/// Every response, success or error, carries the same content type.
pub fn assert_json_content_type(resp: &reqwest::Response) {
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json; charset=utf-8")
    );
}
