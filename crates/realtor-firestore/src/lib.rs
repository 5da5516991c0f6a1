//! Firestore REST API client for the Realtor backend.
//!
//! This crate provides:
//! - Typed repositories for users, properties, offers, wishlist entries,
//!   reviews and static content
//! - Service account authentication via gcp_auth
//! - Masked merge updates, existence preconditions and retry logic

pub mod client;
pub mod content;
pub mod error;
pub mod offers;
pub mod properties;
pub mod retry;
pub mod reviews;
pub mod token_cache;
pub mod types;
pub mod users;
pub mod wishlist;

pub use client::{FirestoreClient, FirestoreConfig};
pub use content::{BlogRepository, TestimonialRepository};
pub use error::{FirestoreError, FirestoreResult};
pub use offers::OfferRepository;
pub use properties::PropertyRepository;
pub use reviews::ReviewRepository;
pub use types::{Document, FromFirestoreValue, ToFirestoreValue, Value};
pub use users::UserRepository;
pub use wishlist::WishlistRepository;
