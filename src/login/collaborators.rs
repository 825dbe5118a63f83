//! Capabilities the login view consumes but does not implement.

use std::sync::Arc;

use async_trait::async_trait;

/// Why an authentication attempt did not succeed.
///
/// The variants exist for logs only; the view collapses all of them into one
/// generic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("credentials rejected (status {0})")]
    Rejected(u16),

    #[error("authentication service unreachable: {0}")]
    Transport(String),

    #[error("authentication failed: {0}")]
    Other(String),
}

/// Verifies credentials against the account backend.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Moves the application to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

#[async_trait]
impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        (**self).login(email, password).await
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}
