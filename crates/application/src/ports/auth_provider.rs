//! Authentication port
//!
//! Sign-in state is observable: callers subscribe to a `watch` channel
//! instead of polling.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::watch;

use crate::error::ApplicationError;

/// Port for the user's sign-in session
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign the user in
    async fn sign_in(&self) -> Result<(), ApplicationError>;

    /// Sign the user out
    async fn sign_out(&self) -> Result<(), ApplicationError>;

    /// Receiver yielding `true` while signed in
    fn subscribe(&self) -> watch::Receiver<bool>;

    /// Current sign-in state
    fn is_signed_in(&self) -> bool {
        *self.subscribe().borrow()
    }
}
