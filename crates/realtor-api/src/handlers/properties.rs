//! Property listing handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use realtor_models::{Property, PropertyStatus, PropertyUpdate};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{InsertResponse, MessageResponse};
use crate::security::is_valid_doc_id;
use crate::state::AppState;

/// List every listing.
pub async fn list_properties(State(state): State<AppState>) -> ApiResult<Json<Vec<Property>>> {
    let properties = state.properties.list().await?;
    Ok(Json(properties))
}

/// Fetch a single listing.
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Property>> {
    if !is_valid_doc_id(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    let property = state
        .properties
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Property not found"))?;

    Ok(Json(property))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub title: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub bed_number: Option<u32>,
    #[serde(default)]
    pub bath_number: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
}

/// Create a listing. Agent only; the owning agent is the caller, and
/// every new listing starts `pending`.
pub async fn create_property(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreatePropertyRequest>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    state.roles.require_agent(&user).await?;

    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Title is required"))?;
    let location = request
        .location
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Location is required"))?;

    let mut property = Property::new(title, location, &user.email);
    property.image = request.image;
    property.bed_number = request.bed_number;
    property.bath_number = request.bath_number;
    property.price = request.price;
    property.price_range = request.price_range;
    property.agent_name = request.agent_name.or_else(|| user.name.clone());

    let id = state.properties.create(&property).await?;

    Ok((StatusCode::CREATED, Json(InsertResponse::inserted(id))))
}

/// Partially update a listing: only the fields present in the body are
/// written. Restricted to the owning agent or an admin.
pub async fn update_property(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(update): Json<PropertyUpdate>,
) -> ApiResult<Json<Property>> {
    if !is_valid_doc_id(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }
    if update.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }

    let existing = state
        .properties
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Property not found"))?;

    authorize_owner_or_admin(&state, &user, &existing).await?;

    let updated = state
        .properties
        .update(&id, &update)
        .await
        .map_err(|e| ApiError::from_store(e, "Property not found"))?;

    Ok(Json(updated))
}

/// Delete a listing. Restricted to the owning agent or an admin.
pub async fn delete_property(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !is_valid_doc_id(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    let existing = state
        .properties
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Property not found"))?;

    authorize_owner_or_admin(&state, &user, &existing).await?;

    state
        .properties
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "Property not found"))?;

    info!(caller = %user.email, id = %id, "Deleted listing");

    Ok(Json(MessageResponse::new("Property deleted successfully")))
}

/// Mark a listing verified. Admin only; repeating the call when already
/// verified succeeds and changes nothing.
pub async fn verify_property(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    set_property_status(&state, &user, &id, PropertyStatus::Verified).await?;
    Ok(Json(MessageResponse::new("Property verified successfully")))
}

/// Mark a listing rejected. Admin only, idempotent like `verify`.
pub async fn reject_property(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    set_property_status(&state, &user, &id, PropertyStatus::Rejected).await?;
    Ok(Json(MessageResponse::new("Property rejected successfully")))
}

/// Listings owned by an agent. Agent only; empty list when none.
pub async fn list_properties_by_agent(
    State(state): State<AppState>,
    user: AuthUser,
    Path(agent_email): Path<String>,
) -> ApiResult<Json<Vec<Property>>> {
    state.roles.require_agent(&user).await?;

    let properties = state.properties.list_by_agent(&agent_email).await?;
    Ok(Json(properties))
}

async fn set_property_status(
    state: &AppState,
    user: &AuthUser,
    id: &str,
    status: PropertyStatus,
) -> ApiResult<()> {
    state.roles.require_admin(user).await?;

    if !is_valid_doc_id(id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    state
        .properties
        .set_status(id, status)
        .await
        .map_err(|e| ApiError::from_store(e, "Property not found"))?;

    info!(admin = %user.email, id = %id, status = %status, "Changed listing status");
    Ok(())
}

async fn authorize_owner_or_admin(
    state: &AppState,
    user: &AuthUser,
    property: &Property,
) -> ApiResult<()> {
    use realtor_models::Role;

    let role = state.roles.role_of(&user.email).await?;
    let is_admin = role == Some(Role::Admin);
    let is_owner = role == Some(Role::Agent) && property.agent_email == user.email;

    if is_admin || is_owner {
        Ok(())
    } else {
        Err(ApiError::forbidden("forbidden access"))
    }
}
