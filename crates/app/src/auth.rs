//! Admin authorization
//!
//! Admin operations are gated by a shared secret carried in a request
//! header. The comparison strategy sits behind the [`Authorizer`] trait so
//! it can be swapped (constant-time compare, rotating keys) without touching
//! the order repository or the HTTP layer.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use mockall::automock;
use thiserror::Error;
use zeroize::Zeroizing;

/// Authorization failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The presented key does not match the configured secret.
    #[error("Unauthorized")]
    Unauthorized,
}

/// Capability check at the request boundary.
#[automock]
pub trait Authorizer: Send + Sync {
    /// Check a presented key against the server-held secret.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] on mismatch; callers must perform
    /// no data access in that case.
    fn authorize(&self, presented: &str) -> Result<(), AuthError>;
}

/// Authorizer holding a single static shared secret.
///
/// Requires exact equality with the presented value. An empty configured
/// secret authorizes nothing, so a missing `ADMIN_API_KEY` fails closed.
pub struct SharedKeyAuthorizer {
    key: Zeroizing<String>,
}

impl SharedKeyAuthorizer {
    #[must_use]
    pub fn new(key: String) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }
}

impl Authorizer for SharedKeyAuthorizer {
    fn authorize(&self, presented: &str) -> Result<(), AuthError> {
        if !self.key.is_empty() && presented == self.key.as_str() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

impl Debug for SharedKeyAuthorizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SharedKeyAuthorizer")
            .field("key", &"<redacted>")
            .finish()
    }
}
