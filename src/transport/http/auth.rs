//! Basic-auth gate for the mutating recipe routes.

use crate::transport::http::types::{AppState, ErrorBody};
use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// The configured username/password pair. A single pair guards every
/// protected route; there are no per-user accounts.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Checks an `Authorization` header value against the expected pair.
///
/// The `Basic` scheme tag matches case-insensitively; the decoded
/// credentials compare case-sensitively.
pub fn credentials_match(header: Option<&str>, expected: &BasicCredentials) -> bool {
    let Some(header) = header else {
        return false;
    };
    let Some(encoded) = strip_basic_scheme(header) else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };
    match decoded.split_once(':') {
        Some((user, password)) => user == expected.username && password == expected.password,
        None => false,
    }
}

fn strip_basic_scheme(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("Basic") {
        Some(rest)
    } else {
        None
    }
}

/// Middleware wrapped around the mutating routes via `route_layer`. On
/// failure the wrapped handler never runs; the response carries the
/// `WWW-Authenticate` challenge so clients can prompt for credentials.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if credentials_match(header, &state.auth) {
        return next.run(request).await;
    }
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, "Basic realm=Restricted")],
        Json(ErrorBody::new("Unauthorized")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> BasicCredentials {
        BasicCredentials {
            username: "admin".to_string(),
            password: "broccoli".to_string(),
        }
    }

    fn basic(user: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
    }

    #[test]
    fn accepts_the_configured_pair() {
        assert!(credentials_match(
            Some(&basic("admin", "broccoli")),
            &expected()
        ));
    }

    #[test]
    fn scheme_tag_is_case_insensitive() {
        let value = basic("admin", "broccoli").replacen("Basic", "basic", 1);
        assert!(credentials_match(Some(&value), &expected()));
    }

    #[test]
    fn credentials_are_case_sensitive() {
        assert!(!credentials_match(
            Some(&basic("Admin", "broccoli")),
            &expected()
        ));
        assert!(!credentials_match(
            Some(&basic("admin", "BROCCOLI")),
            &expected()
        ));
    }

    #[test]
    fn rejects_missing_or_malformed_headers() {
        assert!(!credentials_match(None, &expected()));
        assert!(!credentials_match(Some(""), &expected()));
        assert!(!credentials_match(Some("Basic"), &expected()));
        assert!(!credentials_match(Some("Bearer abc"), &expected()));
        assert!(!credentials_match(Some("Basic %%%not-base64"), &expected()));
        // decodes fine but has no colon separator
        let no_colon = format!("Basic {}", STANDARD.encode("adminbroccoli"));
        assert!(!credentials_match(Some(&no_colon), &expected()));
    }
}
