//! Static site content: blog posts and testimonials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog post record. Read-mostly; created by admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Store-generated document id
    pub id: String,

    pub title: String,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Testimonial record. Read-mostly; created by admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Store-generated document id
    pub id: String,

    /// Person quoted
    pub name: String,

    /// Quote text
    pub quote: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,

    pub created_at: DateTime<Utc>,
}
