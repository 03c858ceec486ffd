//! Notifier that records everything it is told
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use doc_sanitizer::error::Error;
use doc_sanitizer::notify::Notifier;
use std::sync::Mutex;

/// Records notices, refresh counts and refresh failures in order
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<String>>,
    refreshes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// All notices so far
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    /// Submission counts of applied refreshes
    pub fn refreshes(&self) -> Vec<usize> {
        self.refreshes.lock().unwrap().clone()
    }

    /// Display text of failed refreshes
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }

    /// Assert that some notice contains `needle`
    pub fn assert_notice_contains(&self, needle: &str) {
        let notices = self.notices();
        assert!(
            notices.iter().any(|n| n.contains(needle)),
            "Expected a notice containing {needle:?} but got: {notices:?}"
        );
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn on_notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    async fn on_refreshed(&self, count: usize) {
        self.refreshes.lock().unwrap().push(count);
    }

    async fn on_refresh_failed(&self, error: &Error) {
        self.failures.lock().unwrap().push(error.to_string());
    }
}
