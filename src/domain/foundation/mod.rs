//! Foundation types shared across domain modules.

mod auth;
mod ids;
mod validation;

pub use auth::{AuthError, AuthenticatedUser};
pub use ids::{ApplicationId, UserId};
pub use validation::ValidationError;
