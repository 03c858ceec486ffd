//! Notifier trait for interface-agnostic updates
//!
//! The workflow and the poller report transient notices and refresh
//! outcomes here; a terminal binary renders them, tests record them.

use crate::error::Error;
use async_trait::async_trait;

/// Receiver of user-facing notices
///
/// Nothing reported here is fatal; the caller has already decided to
/// carry on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A short transient message ("Queued: ...", "Rated", ...)
    async fn on_notice(&self, message: &str);

    /// The store now holds a fresh snapshot of `count` submissions
    async fn on_refreshed(&self, count: usize);

    /// A refresh failed; the cached snapshot was left as it was
    async fn on_refresh_failed(&self, error: &Error);
}

/// No-op notifier for testing or when notices aren't needed
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn on_notice(&self, _message: &str) {}
    async fn on_refreshed(&self, _count: usize) {}
    async fn on_refresh_failed(&self, _error: &Error) {}
}
