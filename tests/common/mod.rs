//! Shared test utilities

pub mod fixtures;
pub mod mock_service;
pub mod recording_notifier;
