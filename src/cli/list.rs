//! List command - fetch and print one page of submissions

use crate::cli::Session;
use crate::cli::render::print_submissions;
use doc_sanitizer::error::Result;
use doc_sanitizer::store::Refresher;
use doc_sanitizer::types::Page;
use std::sync::Arc;

/// Run the list command
pub async fn run_list(session: &Session, limit: Option<u32>, offset: Option<u32>) -> Result<()> {
    let page = Page {
        limit: limit.unwrap_or(session.config.page.limit),
        offset: offset.unwrap_or(session.config.page.offset),
    };

    // Custom window: refresh through a one-off refresher on the same store
    let refresher = Refresher::new(session.service.clone(), Arc::clone(&session.store), page);
    refresher.refresh().await?;

    print_submissions(&session.store.snapshot(), &session.service);
    Ok(())
}
