//! Wishlist handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use realtor_models::WishlistItem;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{InsertResponse, MessageResponse};
use crate::security::is_valid_doc_id;
use crate::state::AppState;

/// The caller's wishlist entries.
pub async fn list_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<WishlistItem>>> {
    let items = state.wishlist.list_for_user(&user.email).await?;
    Ok(Json(items))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistRequest {
    pub property_id: Option<String>,
    #[serde(default)]
    pub property_title: Option<String>,
    #[serde(default)]
    pub property_location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
}

/// Add a listing to the caller's wishlist. One entry per (user,
/// listing) pair; a duplicate insert is a conflict.
pub async fn create_wishlist_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateWishlistRequest>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    let property_id = request
        .property_id
        .as_deref()
        .filter(|id| is_valid_doc_id(id))
        .ok_or_else(|| ApiError::bad_request("A valid propertyId is required"))?;

    if state.wishlist.find(&user.email, property_id).await?.is_some() {
        return Err(ApiError::conflict("Property already in wishlist"));
    }

    let mut item = WishlistItem::new(&user.email, property_id);
    item.property_title = request.property_title;
    item.property_location = request.property_location;
    item.image = request.image;
    item.price_range = request.price_range;

    let id = state.wishlist.create(&item).await?;

    Ok((StatusCode::CREATED, Json(InsertResponse::inserted(id))))
}

/// Remove a listing from the caller's wishlist, addressed by the
/// listing id rather than the entry's own id.
pub async fn delete_wishlist_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(property_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !is_valid_doc_id(&property_id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    let item = state
        .wishlist
        .find(&user.email, &property_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Wishlist item not found"))?;

    state
        .wishlist
        .delete(&item.id)
        .await
        .map_err(|e| ApiError::from_store(e, "Wishlist item not found"))?;

    Ok(Json(MessageResponse::new(
        "Wishlist item deleted successfully",
    )))
}
