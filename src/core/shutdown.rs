//! Graceful shutdown signal
//!
//! One cancellation token shared between Ctrl-C handling and the actuator
//! shutdown endpoint; the HTTP server drains in-flight requests once it
//! fires.

use tokio_util::sync::CancellationToken;

/// Cloneable handle around the process-wide shutdown signal
#[derive(Clone, Debug, Default)]
pub struct ShutdownHandle {
    token: CancellationToken,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Request shutdown; idempotent
    pub fn request(&self) {
        self.token.cancel();
    }

    /// True once shutdown has been requested
    pub fn is_requested(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until shutdown is requested
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }
}
