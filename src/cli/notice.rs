//! Terminal notifier with styled output

use crate::cli::render::print_submissions;
use crate::cli::style::{Stylize, arrow};
use anstream::{eprintln, println};
use async_trait::async_trait;
use doc_sanitizer::client::HttpSubmissionService;
use doc_sanitizer::error::Error;
use doc_sanitizer::notify::Notifier;
use doc_sanitizer::store::SubmissionStore;
use doc_sanitizer::types::SubmissionId;
use std::sync::Arc;
use tokio::sync::Notify;

/// Prints notices to the terminal
///
/// Two modes:
/// - verbose: also reports every applied refresh
/// - quiet: notices and failures only
pub struct CliNotifier {
    /// Report applied refreshes too
    pub verbose: bool,
}

impl CliNotifier {
    /// Notices plus refresh reports
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }

    /// Notices and failures only
    pub const fn quiet() -> Self {
        Self { verbose: false }
    }
}

#[async_trait]
impl Notifier for CliNotifier {
    async fn on_notice(&self, message: &str) {
        println!("{} {message}", arrow());
    }

    async fn on_refreshed(&self, count: usize) {
        if self.verbose {
            let noun = if count == 1 { "submission" } else { "submissions" };
            println!("{}", format!("Refreshed: {count} {noun}").muted());
        }
    }

    async fn on_refresh_failed(&self, error: &Error) {
        eprintln!("{}: refresh failed: {error}", "warning".warn());
    }
}

/// Redraws the submission list after every applied poll
///
/// When a target id is given, `finished` is signalled once that
/// submission reaches a terminal status.
pub struct WatchNotifier {
    store: Arc<SubmissionStore>,
    service: Arc<HttpSubmissionService>,
    target: Option<SubmissionId>,
    /// Signalled when the watched submission is done or failed
    pub finished: Notify,
}

impl WatchNotifier {
    /// Create a watch renderer over `store`
    pub fn new(
        store: Arc<SubmissionStore>,
        service: Arc<HttpSubmissionService>,
        target: Option<SubmissionId>,
    ) -> Self {
        Self {
            store,
            service,
            target,
            finished: Notify::new(),
        }
    }
}

#[async_trait]
impl Notifier for WatchNotifier {
    async fn on_notice(&self, message: &str) {
        println!("{} {message}", arrow());
    }

    async fn on_refreshed(&self, _count: usize) {
        let snapshot = self.store.snapshot();
        println!("{}", "─".repeat(40).muted());

        match &self.target {
            Some(id) => {
                let watched: Vec<_> = snapshot.into_iter().filter(|s| &s.id == id).collect();
                print_submissions(&watched, &self.service);
                if watched.iter().any(|s| s.status.is_terminal()) {
                    self.finished.notify_one();
                }
            }
            None => print_submissions(&snapshot, &self.service),
        }
    }

    async fn on_refresh_failed(&self, error: &Error) {
        eprintln!("{}: poll failed: {error}", "warning".warn());
    }
}
