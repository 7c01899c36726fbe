//! Scoped acquisition of the network transport
//!
//! The async runtime that backs all GitHub calls is acquired once per run
//! and wrapped in a [`Session`]. Dropping the session tears the resource
//! down exactly once, whether the run returned normally, failed, or
//! panicked.

use crate::error::{Error, Result};
use std::future::Future;
use std::ops::Deref;
use std::time::Duration;
use tracing::debug;

/// Grace period for runtime tasks at shutdown
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// A resource with explicit release
pub trait Teardown {
    /// Release the resource. Called at most once.
    fn teardown(self);
}

/// Owns a resource and tears it down on drop
pub struct Session<T: Teardown> {
    resource: Option<T>,
}

impl<T: Teardown> Session<T> {
    /// Take ownership of `resource` for the duration of the session
    pub const fn acquire(resource: T) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    /// Tear down now instead of at end of scope
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(resource) = self.resource.take() {
            resource.teardown();
        }
    }
}

impl<T: Teardown> Deref for Session<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Only `close` and `drop` take the resource, and both consume the session
        self.resource
            .as_ref()
            .unwrap_or_else(|| unreachable!("session resource released while in use"))
    }
}

impl<T: Teardown> Drop for Session<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Multi-threaded tokio runtime used to drive every network call
pub struct Transport {
    runtime: tokio::runtime::Runtime,
}

impl Transport {
    /// Start the runtime
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("renovate-merge-io")
            .build()
            .map_err(|e| Error::Internal(format!("failed to start async runtime: {e}")))?;
        debug!("transport acquired");
        Ok(Self { runtime })
    }

    /// Run `future` to completion on the transport
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl Teardown for Transport {
    fn teardown(self) {
        // Idle pooled connections are closed when their clients drop inside
        // `block_on`; this stops the worker threads and timers.
        self.runtime.shutdown_timeout(SHUTDOWN_GRACE);
        debug!("transport released");
    }
}
