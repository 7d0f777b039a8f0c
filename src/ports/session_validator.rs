//! Session validation port.
//!
//! The identity provider is an external collaborator: it turns a bearer
//! token into an authenticated `{owner id, email}` context before any core
//! logic runs. Only the contract lives here; real provider adapters are
//! out of scope (a mock adapter backs tests and local development).

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Port for validating session tokens.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validates a bearer token and returns the authenticated user.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` / `TokenExpired` for rejected tokens
    /// - `ServiceUnavailable` when the provider is unreachable
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
