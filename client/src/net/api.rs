//! REST helpers for the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response passes through `check_status`. A 401 is raised on the
//! `UnauthorizedSignal` before the error is returned: the window event fires
//! for page scripts and the access gate locks again. Other failures are left
//! to the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AdminStatus;
use crate::util::unauthorized::UnauthorizedSignal;

pub const ADMIN_STATUS_ENDPOINT: &str = "/api/admin/status";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("credential rejected")]
    Unauthorized,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}

/// `Authorization` header value for `credential`.
pub fn bearer_value(credential: &str) -> String {
    format!("Bearer {credential}")
}

/// Only 401 means the credential is missing or wrong; 403 is a permission
/// problem with a valid credential and must not lock the gate.
pub fn is_auth_failure(status: u16) -> bool {
    status == 401
}

/// Map a response status to `Ok` or an `ApiError`, raising `signal` on 401.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for 401 and `ApiError::Status` for any
/// other non-2xx status.
pub fn check_status(status: u16, signal: &UnauthorizedSignal) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    if is_auth_failure(status) {
        log::info!("backend rejected admin credential");
        signal.raise();
        return Err(ApiError::Unauthorized);
    }
    Err(ApiError::Status(status))
}

/// Fetch backend status with `credential` attached.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status or a malformed
/// body. A 401 additionally raises `signal`.
pub async fn fetch_admin_status(
    credential: Option<&str>,
    signal: &UnauthorizedSignal,
) -> Result<AdminStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(ADMIN_STATUS_ENDPOINT);
        if let Some(credential) = credential {
            request = request
                .header("Authorization", &bearer_value(credential))
                .header("x-api-key", credential);
        }
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status(), signal)?;
        resp.json::<AdminStatus>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, signal);
        Err(ApiError::Unavailable)
    }
}
