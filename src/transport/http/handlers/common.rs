//! Shared parsing and normalization for the recipe handlers.
//!
//! Pagination and filter inputs arrive as raw strings and are normalized
//! here instead of being rejected: clients sending garbage get the default
//! window, not a 400. Only recipe ids are strict.

use crate::transport::http::error::ApiError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use std::collections::HashMap;

/// Page size ceiling, and the fallback when the requested count is unusable.
pub const MAX_PAGE_SIZE: i64 = 10;

/// Prep-time filter that excludes nothing; no recipe takes a week to cook.
pub const NO_PREPTIME_FILTER: f64 = 9999.99;

/// Effective OFFSET/LIMIT pair after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: i64,
    pub count: i64,
}

/// Normalizes raw pagination inputs. Missing or non-numeric values parse as
/// 0; a count outside 1..=10 becomes 10 and a negative start becomes 0.
pub fn page_window(count: Option<&str>, start: Option<&str>) -> PageWindow {
    let mut count = parse_or_zero(count);
    let mut start = parse_or_zero(start);
    if count > MAX_PAGE_SIZE || count < 1 {
        count = MAX_PAGE_SIZE;
    }
    if start < 0 {
        start = 0;
    }
    PageWindow { start, count }
}

/// Upper bound for the search prep-time filter. Absent or empty means no
/// filter (the sentinel); non-numeric input collapses to 0.
pub fn preptime_threshold(raw: Option<&str>) -> f64 {
    match raw {
        None => NO_PREPTIME_FILTER,
        Some(s) if s.is_empty() => NO_PREPTIME_FILTER,
        Some(s) => s.parse::<f64>().unwrap_or(0.0),
    }
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0)
}

/// Parses a path id, mapping any failure to the public "Invalid recipe ID"
/// error.
pub fn parse_recipe_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidRecipeId)
}

/// Drains the form fields of a request into a name -> value map. Multipart
/// and urlencoded bodies are both understood; any other (or malformed) body
/// yields an empty map, and the search endpoint falls back to query
/// parameters. A repeated field keeps its first value.
pub async fn collect_form_fields(request: Request) -> HashMap<String, String> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        match Multipart::from_request(request, &()).await {
            Ok(multipart) => drain_multipart(multipart).await,
            Err(_) => HashMap::new(),
        }
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        match Form::<Vec<(String, String)>>::from_request(request, &()).await {
            Ok(Form(pairs)) => {
                let mut fields = HashMap::new();
                for (name, value) in pairs {
                    fields.entry(name).or_insert(value);
                }
                fields
            }
            Err(_) => HashMap::new(),
        }
    } else {
        HashMap::new()
    }
}

async fn drain_multipart(mut multipart: Multipart) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if let Ok(value) = field.text().await {
            fields.entry(name).or_insert(value);
        }
    }
    fields
}
