//! doc-sanitizer - submission lifecycle client
//!
//! Submits a document plus a set of text-replacement rules to a remote
//! processing service, keeps a local cache of submissions in sync by
//! polling, and rates completed submissions.

pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod poll;
pub mod replacements;
pub mod store;
pub mod types;
pub mod workflow;
