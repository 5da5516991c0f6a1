//! Property listing models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Listing verification status.
///
/// New listings start `pending`; admins may move a listing between
/// `verified` and `rejected` at will (re-review is a legitimate
/// operation, so neither state is terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Pending => "pending",
            PropertyStatus::Verified => "verified",
            PropertyStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown property status: {0}")]
pub struct ParsePropertyStatusError(pub String);

impl FromStr for PropertyStatus {
    type Err = ParsePropertyStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PropertyStatus::Pending),
            "verified" => Ok(PropertyStatus::Verified),
            "rejected" => Ok(PropertyStatus::Rejected),
            other => Err(ParsePropertyStatusError(other.to_string())),
        }
    }
}

/// Property listing stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Store-generated document id
    pub id: String,

    /// Listing title
    pub title: String,

    /// Location/address line
    pub location: String,

    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Bedroom count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_number: Option<u32>,

    /// Bathroom count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bath_number: Option<u32>,

    /// Asking price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Asking price range, e.g. "200000-250000"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,

    /// Owning agent's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,

    /// Owning agent's email
    pub agent_email: String,

    /// Verification status
    #[serde(default)]
    pub status: PropertyStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create a new pending listing owned by the given agent.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        agent_email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: title.into(),
            location: location.into(),
            image: None,
            bed_number: None,
            bath_number: None,
            price: None,
            price_range: None,
            agent_name: None,
            agent_email: agent_email.into(),
            status: PropertyStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a listing.
///
/// Fields absent from the request body stay untouched in the stored
/// record; `field_paths` names exactly the fields present so the store
/// layer can build an update mask.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    pub title: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub bed_number: Option<u32>,
    pub bath_number: Option<u32>,
    pub price: Option<f64>,
    pub price_range: Option<String>,
    pub agent_name: Option<String>,
}

impl PropertyUpdate {
    /// Store field paths for the fields present in this update.
    pub fn field_paths(&self) -> Vec<&'static str> {
        let mut paths = Vec::new();
        if self.title.is_some() {
            paths.push("title");
        }
        if self.location.is_some() {
            paths.push("location");
        }
        if self.image.is_some() {
            paths.push("image");
        }
        if self.bed_number.is_some() {
            paths.push("bed_number");
        }
        if self.bath_number.is_some() {
            paths.push("bath_number");
        }
        if self.price.is_some() {
            paths.push("price");
        }
        if self.price_range.is_some() {
            paths.push("price_range");
        }
        if self.agent_name.is_some() {
            paths.push("agent_name");
        }
        paths
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.field_paths().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_listing_starts_pending() {
        let property = Property::new("Lakeside villa", "Lake Rd 5", "agent@x.com");
        assert_eq!(property.status, PropertyStatus::Pending);
    }

    #[test]
    fn test_update_mask_names_only_present_fields() {
        let update = PropertyUpdate {
            title: Some("New title".to_string()),
            price: Some(250_000.0),
            ..Default::default()
        };
        assert_eq!(update.field_paths(), vec!["title", "price"]);
    }

    #[test]
    fn test_empty_update() {
        assert!(PropertyUpdate::default().is_empty());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("verified".parse::<PropertyStatus>().unwrap(), PropertyStatus::Verified);
        assert!("approved".parse::<PropertyStatus>().is_err());
    }
}
