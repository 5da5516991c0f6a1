//! Listing reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Valid rating range, inclusive.
pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 5;

/// Review on a listing, stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Store-generated document id
    pub id: String,

    /// Referenced listing id
    pub property_id: String,

    /// Listing title snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,

    /// Author's email
    pub reviewer_email: String,

    /// Author's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,

    /// Star rating, 1-5
    pub rating: u32,

    /// Free-text comment
    pub comment: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// True when the rating is inside the allowed range.
    pub fn rating_in_range(rating: u32) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_range() {
        assert!(Review::rating_in_range(1));
        assert!(Review::rating_in_range(5));
        assert!(!Review::rating_in_range(0));
        assert!(!Review::rating_in_range(6));
    }
}
