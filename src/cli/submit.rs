//! Submit command - upload a document with replacement rules

use crate::cli::Session;
use crate::cli::render::print_submission;
use crate::cli::style::{Stylize, check};
use anstream::println;
use doc_sanitizer::error::Result;
use doc_sanitizer::replacements::ReplacementSet;
use doc_sanitizer::types::UploadFile;
use std::path::Path;
use std::sync::Arc;

/// Run the submit command
///
/// `pairs` are `FIND=REPLACE` arguments, in order; later duplicates win.
pub async fn run_submit(session: &Session, file: Option<&Path>, pairs: &[String]) -> Result<()> {
    let upload = match file {
        Some(path) => Some(UploadFile::from_path(path).await?),
        None => None,
    };

    let rows: ReplacementSet = pairs
        .iter()
        .map(|pair| ReplacementSet::parse_pair(pair))
        .collect();

    let workflow = session.workflow(Arc::new(session.notifier()));
    let id = workflow.submit(upload, &rows).await?;

    println!();
    println!("{} Submitted {}", check(), id.accent());
    if let Some(submission) = session.store.get(&id) {
        print_submission(&submission, &session.service);
    }

    Ok(())
}
