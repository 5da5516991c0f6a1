//! User records and roles.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse capability label attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    /// Plain user, the default for every new sign-in.
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            "user" => Ok(Role::User),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// User record stored in Firestore.
///
/// Identity is the email address; creation is idempotent on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Store-generated document id
    pub id: String,

    /// Unique email address
    pub email: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar/photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    /// Capability role
    #[serde(default)]
    pub role: Role,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new plain-user record.
    pub fn new(email: impl Into<String>, name: Option<String>, photo: Option<String>) -> Self {
        Self {
            id: String::new(),
            email: email.into(),
            name,
            photo,
            role: Role::User,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Agent, Role::User] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("superadmin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_new_user_defaults_to_plain_role() {
        let user = UserRecord::new("a@x.com", None, None);
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "a@x.com");
    }
}
