//! Blog and testimonial handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use realtor_models::{BlogPost, Review, Testimonial};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::InsertResponse;
use crate::security::is_valid_doc_id;
use crate::state::AppState;

/// List every blog post.
pub async fn list_blogs(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogPost>>> {
    let blogs = state.blogs.list().await?;
    Ok(Json(blogs))
}

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Publish a blog post. Admin only.
pub async fn create_blog(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateBlogRequest>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    state.roles.require_admin(&user).await?;

    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Title is required"))?;
    let content = request
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let post = BlogPost {
        id: String::new(),
        title,
        content,
        author: request.author,
        image: request.image,
        created_at: Utc::now(),
    };

    let id = state.blogs.create(&post).await?;

    Ok((StatusCode::CREATED, Json(InsertResponse::inserted(id))))
}

/// List every testimonial.
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Testimonial>>> {
    let testimonials = state.testimonials.list().await?;
    Ok(Json(testimonials))
}

/// Fetch a single testimonial.
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Testimonial>> {
    if !is_valid_doc_id(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }

    let testimonial = state
        .testimonials
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Testimonial not found"))?;

    Ok(Json(testimonial))
}

#[derive(Debug, Deserialize)]
pub struct CreateTestimonialRequest {
    pub name: Option<String>,
    pub quote: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<u32>,
}

/// Publish a testimonial. Admin only.
pub async fn create_testimonial(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateTestimonialRequest>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    state.roles.require_admin(&user).await?;

    let name = request
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Name is required"))?;
    let quote = request
        .quote
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Quote is required"))?;

    if let Some(rating) = request.rating {
        if !Review::rating_in_range(rating) {
            return Err(ApiError::bad_request("Rating must be between 1 and 5"));
        }
    }

    let testimonial = Testimonial {
        id: String::new(),
        name,
        quote,
        image: request.image,
        rating: request.rating,
        created_at: Utc::now(),
    };

    let id = state.testimonials.create(&testimonial).await?;

    Ok((StatusCode::CREATED, Json(InsertResponse::inserted(id))))
}
