//! Role resolution and capability checks.
//!
//! Runs after the bearer-token guard: the resolver only accepts an
//! already-verified [`AuthUser`], so a role can never be checked before
//! the token is.

use realtor_models::Role;
use realtor_firestore::UserRepository;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};

/// Looks up a user's role and authorizes or denies per required role.
#[derive(Clone)]
pub struct RoleService {
    users: UserRepository,
}

impl RoleService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Role recorded for the email; `None` when no user record exists.
    pub async fn role_of(&self, email: &str) -> ApiResult<Option<Role>> {
        Ok(self.users.role_of(email).await?)
    }

    /// Reject with 403 unless the user record exists and carries the
    /// required role.
    pub async fn require_role(&self, user: &AuthUser, role: Role) -> ApiResult<()> {
        match self.role_of(&user.email).await? {
            Some(actual) if actual == role => Ok(()),
            _ => Err(ApiError::forbidden("forbidden access")),
        }
    }

    pub async fn require_admin(&self, user: &AuthUser) -> ApiResult<()> {
        self.require_role(user, Role::Admin).await
    }

    pub async fn require_agent(&self, user: &AuthUser) -> ApiResult<()> {
        self.require_role(user, Role::Agent).await
    }

    /// Non-rejecting admin check, for owner-or-admin authorization.
    pub async fn is_admin(&self, user: &AuthUser) -> ApiResult<bool> {
        Ok(self.role_of(&user.email).await? == Some(Role::Admin))
    }
}
