//! Review handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use realtor_models::Review;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::{InsertResponse, MessageResponse};
use crate::security::is_valid_doc_id;
use crate::state::AppState;

/// List every review.
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Json<Vec<Review>>> {
    let reviews = state.reviews.list().await?;
    Ok(Json(reviews))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub property_id: Option<String>,
    #[serde(default)]
    pub property_title: Option<String>,
    pub rating: Option<u32>,
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewer_name: Option<String>,
}

/// Create a review. The author is the caller.
pub async fn create_review(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateReviewRequest>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    let property_id = request
        .property_id
        .as_deref()
        .filter(|id| is_valid_doc_id(id))
        .ok_or_else(|| ApiError::bad_request("A valid propertyId is required"))?;
    let rating = request
        .rating
        .filter(|r| Review::rating_in_range(*r))
        .ok_or_else(|| ApiError::bad_request("Rating must be between 1 and 5"))?;
    let comment = request
        .comment
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Comment is required"))?;

    let review = Review {
        id: String::new(),
        property_id: property_id.to_string(),
        property_title: request.property_title,
        reviewer_email: user.email.clone(),
        reviewer_name: request.reviewer_name.or_else(|| user.name.clone()),
        rating,
        comment,
        created_at: Utc::now(),
    };

    let id = state.reviews.create(&review).await?;

    Ok((StatusCode::CREATED, Json(InsertResponse::inserted(id))))
}

/// Delete a review. Restricted to the originating author or an admin.
pub async fn delete_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !is_valid_doc_id(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    let review = state
        .reviews
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Review not found"))?;

    if review.reviewer_email != user.email && !state.roles.is_admin(&user).await? {
        return Err(ApiError::forbidden("forbidden access"));
    }

    state
        .reviews
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "Review not found"))?;

    Ok(Json(MessageResponse::new("Review deleted successfully")))
}
