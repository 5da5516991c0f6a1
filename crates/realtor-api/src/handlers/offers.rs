//! Offer handlers: creation and the acceptance workflow.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use realtor_models::{Offer, OfferStatus};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{InsertResponse, MessageResponse};
use crate::security::is_valid_doc_id;
use crate::state::AppState;

/// List every offer.
pub async fn list_offers(State(state): State<AppState>) -> ApiResult<Json<Vec<Offer>>> {
    let offers = state.offers.list().await?;
    Ok(Json(offers))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    pub property_id: Option<String>,
    pub offered_price: Option<f64>,
    #[serde(default)]
    pub buyer_name: Option<String>,
}

/// Create an offer on a listing. Open to any authenticated user; the
/// offering party is the caller and the owning agent is denormalized
/// from the referenced listing.
pub async fn create_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateOfferRequest>,
) -> ApiResult<Json<InsertResponse>> {
    let property_id = request
        .property_id
        .as_deref()
        .filter(|id| is_valid_doc_id(id))
        .ok_or_else(|| ApiError::bad_request("A valid propertyId is required"))?;
    let offered_price = request
        .offered_price
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or_else(|| ApiError::bad_request("A positive offeredPrice is required"))?;

    let property = state
        .properties
        .get(property_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Property not found"))?;

    let mut offer = Offer::new(property_id, &user.email, &property.agent_email, offered_price);
    offer.property_title = Some(property.title);
    offer.property_location = Some(property.location);
    offer.buyer_name = request.buyer_name.or_else(|| user.name.clone());

    let id = state.offers.create(&offer).await?;

    Ok(Json(InsertResponse::inserted(id)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferStatusRequest {
    pub status: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Resolve an offer to `accepted` or `rejected`.
///
/// Restricted to the agent owning the referenced listing. A transaction
/// reference may only accompany an acceptance.
pub async fn update_offer_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(offer_id): Path<String>,
    Json(request): Json<OfferStatusRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let status: OfferStatus = request
        .status
        .as_deref()
        .and_then(|s| s.parse().ok())
        .filter(|s| *s != OfferStatus::Pending)
        .ok_or_else(|| ApiError::bad_request("Status must be accepted or rejected"))?;

    if request.transaction_id.is_some() && status != OfferStatus::Accepted {
        return Err(ApiError::bad_request(
            "A transactionId may only be set on acceptance",
        ));
    }

    transition_offer(&state, &user, &offer_id, status, request.transaction_id.as_deref()).await?;

    Ok(Json(MessageResponse::new("Offer status updated successfully")))
}

/// Accept an offer (status transition alias, no transaction reference).
pub async fn accept_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(offer_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    transition_offer(&state, &user, &offer_id, OfferStatus::Accepted, None).await?;
    Ok(Json(MessageResponse::new("Offer accepted successfully")))
}

/// Reject an offer (status transition alias).
pub async fn reject_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(offer_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    transition_offer(&state, &user, &offer_id, OfferStatus::Rejected, None).await?;
    Ok(Json(MessageResponse::new("Offer rejected successfully")))
}

/// Delete an offer. Restricted to the offering buyer or an admin.
pub async fn delete_offer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(offer_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !is_valid_doc_id(&offer_id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    let offer = state
        .offers
        .get(&offer_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Offer not found"))?;

    if offer.buyer_email != user.email && !state.roles.is_admin(&user).await? {
        return Err(ApiError::forbidden("forbidden access"));
    }

    state
        .offers
        .delete(&offer_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Offer not found"))?;

    info!(caller = %user.email, id = %offer_id, "Deleted offer");

    Ok(Json(MessageResponse::new("Offer deleted successfully")))
}

/// Offers on listings owned by an agent. Agent only.
pub async fn list_offers_by_agent(
    State(state): State<AppState>,
    user: AuthUser,
    Path(agent_email): Path<String>,
) -> ApiResult<Json<Vec<Offer>>> {
    state.roles.require_agent(&user).await?;

    let offers = state.offers.list_by_agent(&agent_email).await?;
    Ok(Json(offers))
}

async fn transition_offer(
    state: &AppState,
    user: &AuthUser,
    offer_id: &str,
    status: OfferStatus,
    transaction_id: Option<&str>,
) -> ApiResult<()> {
    if !is_valid_doc_id(offer_id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    state.roles.require_agent(user).await?;

    let offer = state
        .offers
        .get(offer_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Offer not found"))?;

    if offer.agent_email != user.email {
        return Err(ApiError::forbidden("forbidden access"));
    }

    state
        .offers
        .set_status(offer_id, status, transaction_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Offer not found"))?;

    info!(agent = %user.email, id = %offer_id, status = %status, "Resolved offer");
    Ok(())
}
