use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::http::state::AppState;

/// Session cookie set after a successful code submission. Its presence alone
/// marks the session verified — the value is never re-checked against the
/// secret. Unsigned, client-held trust; a pre-existing limitation of the
/// design, kept as-is.
pub const ACCESS_COOKIE: &str = "access_verified";

/// Session-scoped (no Max-Age — expires when the browser discards it) and
/// readable from JavaScript, which the front end uses to skip the code prompt.
const ACCESS_COOKIE_VALUE: &str = "access_verified=true; Path=/; SameSite=Lax";

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

/// True when the Cookie header carries the verification cookie.
pub fn has_access_cookie(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|cookies| {
            cookies
                .split(';')
                .any(|cookie| cookie.trim().split('=').next() == Some(ACCESS_COOKIE))
        })
        .unwrap_or(false)
}

/// GET /api/access-status — reports whether the gate is enabled. No auth.
pub async fn access_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "enable_code": state.config.access.enable_code }))
}

/// POST /api/verify-access — compare the submitted code to the configured
/// secret. Success sets the session cookie; failure is a generic 401 that
/// leaks nothing about the correct value.
pub async fn verify_access(
    State(state): State<AppState>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid request" })),
        )
            .into_response();
    };

    if request.code == state.config.access.access_code {
        (
            [(header::SET_COOKIE, ACCESS_COOKIE_VALUE)],
            Json(json!({ "status": "success" })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status": "failed", "message": "wrong access code" })),
        )
            .into_response()
    }
}
