use crate::storage::RecipeStore;
use crate::transport::http::auth::BasicCredentials;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: RecipeStore,
    pub auth: Arc<BasicCredentials>,
}

/// Uniform error envelope: every non-2xx body is `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body confirming a successful delete.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeleteConfirmation {
    pub result: String,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}

/// Health probe response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

/// Raw pagination inputs. Kept as strings: out-of-range and non-numeric
/// values are normalized by `page_window`, never rejected. Handlers take
/// these via `Option<Query<..>>`, so a query string that defeats decoding
/// (a repeated key) degrades to the defaults the same way.
#[derive(Deserialize, Debug, Default)]
pub struct PageParams {
    pub count: Option<String>,
    pub start: Option<String>,
}

/// Search inputs: pagination plus an optional `preptime` upper bound. Each
/// field may arrive as a form field (multipart or urlencoded) or a query
/// parameter.
#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub count: Option<String>,
    pub start: Option<String>,
    pub preptime: Option<String>,
}
