//! User handlers: sign-in records, public role queries, role management.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use realtor_models::{Role, UserRecord};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{InsertResponse, MessageResponse};
use crate::security::{is_valid_doc_id, is_valid_email};
use crate::state::AppState;

/// List every user record.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserRecord>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

#[derive(Serialize)]
pub struct AdminQueryResponse {
    pub admin: bool,
}

/// Public role query: is this email an admin? Unknown users are plain
/// `false`, never an error.
pub async fn query_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<AdminQueryResponse>> {
    let admin = state.roles.role_of(&email).await? == Some(Role::Admin);
    Ok(Json(AdminQueryResponse { admin }))
}

#[derive(Serialize)]
pub struct AgentQueryResponse {
    pub agent: bool,
}

/// Public role query: is this email an agent?
pub async fn query_agent(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<AgentQueryResponse>> {
    let agent = state.roles.role_of(&email).await? == Some(Role::Agent);
    Ok(Json(AgentQueryResponse { agent }))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Create a user record on first sign-in.
///
/// Idempotent on email: a second create with the same email reports the
/// existing record instead of inserting a duplicate.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<InsertResponse>> {
    let email = request
        .email
        .as_deref()
        .filter(|e| is_valid_email(e))
        .ok_or_else(|| ApiError::bad_request("A valid email is required"))?;

    if state.users.find_by_email(email).await?.is_some() {
        return Ok(Json(InsertResponse::exists("User already exists")));
    }

    let user = UserRecord::new(email, request.name, request.photo);
    let id = state.users.create(&user).await?;

    Ok(Json(InsertResponse::inserted(id)))
}

#[derive(Debug, Deserialize)]
pub struct RoleChangeRequest {
    pub role: String,
}

/// Change a user's role. Admin only.
pub async fn update_user_role(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<RoleChangeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.roles.require_admin(&user).await?;

    if !is_valid_doc_id(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    let role: Role = request
        .role
        .parse()
        .map_err(|_| ApiError::bad_request("Role must be admin, agent or user"))?;

    state
        .users
        .set_role(&id, role)
        .await
        .map_err(|e| ApiError::from_store(e, "User not found"))?;

    info!(admin = %user.email, target = %id, role = %role, "Changed user role");

    Ok(Json(MessageResponse::new("User role updated successfully")))
}

/// Delete a user record. Admin only.
pub async fn delete_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.roles.require_admin(&user).await?;

    if !is_valid_doc_id(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    state
        .users
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "User not found"))?;

    info!(admin = %user.email, target = %id, "Deleted user");

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
