//! Application state.

use std::sync::Arc;

use realtor_firestore::{
    BlogRepository, FirestoreClient, OfferRepository, PropertyRepository, ReviewRepository,
    TestimonialRepository, UserRepository, WishlistRepository,
};

use crate::auth::TokenKeys;
use crate::config::ApiConfig;
use crate::roles::RoleService;

/// Shared application state.
///
/// The store client is constructed once at startup and injected into
/// every repository; nothing here is an ambient singleton.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub keys: Arc<TokenKeys>,
    pub roles: RoleService,
    pub users: UserRepository,
    pub properties: PropertyRepository,
    pub offers: OfferRepository,
    pub wishlist: WishlistRepository,
    pub reviews: ReviewRepository,
    pub blogs: BlogRepository,
    pub testimonials: TestimonialRepository,
}

impl AppState {
    /// Create new application state. Store misconfiguration fails here,
    /// before the listener binds.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let firestore = FirestoreClient::from_env().await?;

        let keys = Arc::new(TokenKeys::from_secret(config.token_secret.as_bytes()));
        let users = UserRepository::new(firestore.clone());
        let roles = RoleService::new(users.clone());

        Ok(Self {
            config,
            keys,
            roles,
            users,
            properties: PropertyRepository::new(firestore.clone()),
            offers: OfferRepository::new(firestore.clone()),
            wishlist: WishlistRepository::new(firestore.clone()),
            reviews: ReviewRepository::new(firestore.clone()),
            blogs: BlogRepository::new(firestore.clone()),
            testimonials: TestimonialRepository::new(firestore),
        })
    }
}
