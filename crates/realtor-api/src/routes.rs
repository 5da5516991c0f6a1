//! API routes.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::content::{
    create_blog, create_testimonial, get_testimonial, list_blogs, list_testimonials,
};
use crate::handlers::health::{health, liveness};
use crate::handlers::offers::{
    accept_offer, create_offer, delete_offer, list_offers, list_offers_by_agent, reject_offer,
    update_offer_status,
};
use crate::handlers::properties::{
    create_property, delete_property, get_property, list_properties, list_properties_by_agent,
    reject_property, update_property, verify_property,
};
use crate::handlers::reviews::{create_review, delete_review, list_reviews};
use crate::handlers::session::issue_token;
use crate::handlers::users::{
    create_user, delete_user, list_users, query_admin, query_agent, update_user_role,
};
use crate::handlers::wishlist::{create_wishlist_item, delete_wishlist_item, list_wishlist};
use crate::middleware::{
    cors_layer, rate_limit_middleware, request_id, request_logging, security_headers,
    RateLimiterCache,
};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/jwt", post(issue_token))
        .route("/users", get(list_users).post(create_user))
        // Public role queries for client-side capability checks
        .route("/users/admin/:email", get(query_admin))
        .route("/users/agent/:email", get(query_agent))
        // Role management (admin only)
        .route("/users/:id/role", patch(update_user_role))
        .route("/users/:id", delete(delete_user));

    let property_routes = Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route(
            "/properties/:id",
            get(get_property).patch(update_property).delete(delete_property),
        )
        // Admin review workflow
        .route("/properties/:id/verify", patch(verify_property))
        .route("/properties/:id/reject", patch(reject_property))
        // Agent dashboard
        .route("/properties/agent/:agentEmail", get(list_properties_by_agent));

    let offer_routes = Router::new()
        .route("/offers", get(list_offers).post(create_offer))
        .route("/offers/:offerId", delete(delete_offer))
        .route("/offers/:offerId/status", patch(update_offer_status))
        .route("/offers/:offerId/accept", patch(accept_offer))
        .route("/offers/:offerId/reject", patch(reject_offer))
        .route("/offers/agent/:agentEmail", get(list_offers_by_agent));

    let wishlist_routes = Router::new()
        .route("/wishlist", get(list_wishlist).post(create_wishlist_item))
        .route("/wishlist/:propertyId", delete(delete_wishlist_item));

    let review_routes = Router::new()
        .route("/reviews", get(list_reviews).post(create_review))
        .route("/reviews/:id", delete(delete_review));

    let content_routes = Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route("/testimonials", get(list_testimonials).post(create_testimonial))
        .route("/testimonials/:id", get(get_testimonial));

    // Rate limiter shared across the API surface
    let rate_limiter = Arc::new(RateLimiterCache::new(state.config.rate_limit_rps));

    let api_routes = Router::new()
        .merge(user_routes)
        .merge(property_routes)
        .merge(offer_routes)
        .merge(wishlist_routes)
        .merge(review_routes)
        .merge(content_routes)
        .layer(middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ));

    let health_routes = Router::new()
        .route("/", get(liveness))
        .route("/health", get(health));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
