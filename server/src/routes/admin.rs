//! Admin API routes guarded by the operator credential.
//!
//! The browser gate stores whatever the operator typed and sends it on every
//! request. This module is where that value is actually checked: a missing
//! or wrong credential is answered with 401, which the client turns back
//! into a locked gate.

use axum::extract::{FromRef, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Credential sent with the request, if any.
///
/// `Authorization: Bearer <v>` wins over `x-api-key: <v>`.
pub(crate) fn presented_credential(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| {
            let (scheme, value) = raw.trim().split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| value.trim().to_owned())
        });
    bearer
        .or_else(|| {
            headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_owned())
        })
        .filter(|v| !v.is_empty())
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Proof that the request carried an accepted admin credential.
/// Use as a handler parameter to require it.
pub struct AdminAccess;

impl<S> axum::extract::FromRequestParts<S> for AdminAccess
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        if app_state.config.auth_disabled {
            return Ok(Self);
        }

        let Some(presented) = presented_credential(&parts.headers) else {
            tracing::debug!(path = %parts.uri.path(), "admin request without credential");
            return Err(StatusCode::UNAUTHORIZED);
        };
        if !app_state.config.credentials.accepts(&presented) {
            tracing::warn!(path = %parts.uri.path(), "admin request with rejected credential");
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Self)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// `GET /api/admin/status`: service name, version and uptime.
pub async fn status(State(state): State<AppState>, _access: AdminAccess) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
    })
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
