//! Offer models and the acceptance workflow.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offer workflow status: `pending -> accepted | rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl OfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferStatus::Pending => "pending",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown offer status: {0}")]
pub struct ParseOfferStatusError(pub String);

impl FromStr for OfferStatus {
    type Err = ParseOfferStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OfferStatus::Pending),
            "accepted" => Ok(OfferStatus::Accepted),
            "rejected" => Ok(OfferStatus::Rejected),
            other => Err(ParseOfferStatusError(other.to_string())),
        }
    }
}

/// Offer on a listing, stored in Firestore.
///
/// The owning agent's email is denormalized from the listing so that
/// authorization and the per-agent listing need a single document read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Store-generated document id
    pub id: String,

    /// Referenced listing id
    pub property_id: String,

    /// Listing title snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,

    /// Listing location snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_location: Option<String>,

    /// Offering party's email
    pub buyer_email: String,

    /// Offering party's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,

    /// Email of the agent owning the referenced listing
    pub agent_email: String,

    /// Offered amount
    pub offered_price: f64,

    /// Workflow status
    #[serde(default)]
    pub status: OfferStatus,

    /// Payment transaction reference, set only on acceptance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    /// Create a new pending offer.
    pub fn new(
        property_id: impl Into<String>,
        buyer_email: impl Into<String>,
        agent_email: impl Into<String>,
        offered_price: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            property_id: property_id.into(),
            property_title: None,
            property_location: None,
            buyer_email: buyer_email.into(),
            buyer_name: None,
            agent_email: agent_email.into(),
            offered_price,
            status: OfferStatus::Pending,
            transaction_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_offer_starts_pending() {
        let offer = Offer::new("p1", "buyer@x.com", "agent@x.com", 180_000.0);
        assert_eq!(offer.status, OfferStatus::Pending);
        assert!(offer.transaction_id.is_none());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("accepted".parse::<OfferStatus>().unwrap(), OfferStatus::Accepted);
        assert_eq!("rejected".parse::<OfferStatus>().unwrap(), OfferStatus::Rejected);
        assert!("approved".parse::<OfferStatus>().is_err());
    }
}
