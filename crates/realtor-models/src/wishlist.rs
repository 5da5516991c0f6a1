//! Wishlist entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wishlist entry keyed by (user email, property id).
///
/// One entry per pair; deletion is addressed by the property id scoped
/// to the owning user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Store-generated document id
    pub id: String,

    /// Owning user's email
    pub user_email: String,

    /// Referenced listing id
    pub property_id: String,

    /// Listing title snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,

    /// Listing location snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_location: Option<String>,

    /// Listing image snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Listing price range snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn new(user_email: impl Into<String>, property_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            user_email: user_email.into(),
            property_id: property_id.into(),
            property_title: None,
            property_location: None,
            image: None,
            price_range: None,
            created_at: Utc::now(),
        }
    }
}
