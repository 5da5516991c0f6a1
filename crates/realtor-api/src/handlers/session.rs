//! Access-token issuance.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::security::is_valid_email;
use crate::state::AppState;

/// Identity claim presented at sign-in.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a signed, time-limited access token for the presented identity.
/// No store access; the claim is taken at face value and capabilities
/// are resolved per-request later.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let email = request
        .email
        .as_deref()
        .filter(|e| is_valid_email(e))
        .ok_or_else(|| ApiError::bad_request("A valid email is required"))?;

    let token = state.keys.issue(email, request.name.as_deref())?;

    Ok(Json(TokenResponse { token }))
}
