//! Request handlers.

use serde::Serialize;

pub mod content;
pub mod health;
pub mod offers;
pub mod properties;
pub mod reviews;
pub mod session;
pub mod users;
pub mod wishlist;

pub use content::*;
pub use health::*;
pub use offers::*;
pub use properties::*;
pub use reviews::*;
pub use session::*;
pub use users::*;
pub use wishlist::*;

/// Simple acknowledgment body.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Store insert acknowledgment.
///
/// `insertedId` is always present so that a duplicate-create response
/// carries an explicit `null`, matching what clients already expect.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub inserted_id: Option<String>,
}

impl InsertResponse {
    pub fn inserted(id: impl Into<String>) -> Self {
        Self {
            message: None,
            inserted_id: Some(id.into()),
        }
    }

    pub fn exists(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            inserted_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_response_carries_explicit_null_on_duplicate() {
        let body = serde_json::to_value(InsertResponse::exists("User already exists")).unwrap();
        assert_eq!(body["message"], "User already exists");
        assert!(body["insertedId"].is_null());
    }

    #[test]
    fn test_insert_response_omits_message_on_success() {
        let body = serde_json::to_value(InsertResponse::inserted("abc123")).unwrap();
        assert_eq!(body["insertedId"], "abc123");
        assert!(body.get("message").is_none());
    }
}
