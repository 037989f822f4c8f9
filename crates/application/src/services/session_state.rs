//! In-memory sign-in session

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use crate::{error::ApplicationError, ports::AuthProvider};

/// Observable signed-in flag
///
/// Stands in for an OAuth session where none is available (CLI, tests).
#[derive(Debug)]
pub struct SessionState {
    signed_in: watch::Sender<bool>,
}

impl SessionState {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::with_state(false)
    }

    /// Create a session with the given initial state
    pub fn with_state(signed_in: bool) -> Self {
        let (signed_in, _) = watch::channel(signed_in);
        Self { signed_in }
    }

    fn set(&self, signed_in: bool) {
        let previous = self.signed_in.send_replace(signed_in);
        if previous != signed_in {
            info!(signed_in, "Session state changed");
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for SessionState {
    async fn sign_in(&self) -> Result<(), ApplicationError> {
        self.set(true);
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), ApplicationError> {
        self.set(false);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.signed_in.subscribe()
    }

    fn is_signed_in(&self) -> bool {
        *self.signed_in.borrow()
    }
}
