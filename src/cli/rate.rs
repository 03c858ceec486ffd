//! Rate command - attach a satisfaction rating to a submission

use crate::cli::Session;
use crate::cli::render::print_submission;
use dialoguer::Select;
use doc_sanitizer::error::{Error, Result};
use doc_sanitizer::types::SubmissionId;
use std::sync::Arc;

/// Quick picks offered when no rating is given
const QUICK_RATINGS: [(&str, u8); 3] = [("😡  1", 1), ("😐  3", 3), ("😍  5", 5)];

/// Run the rate command
pub async fn run_rate(
    session: &Session,
    id: &str,
    rating: Option<u8>,
    note: Option<&str>,
) -> Result<()> {
    let rating = match rating {
        Some(rating) => rating,
        None => prompt_rating()?,
    };

    let id = SubmissionId::from(id);
    let workflow = session.workflow(Arc::new(session.notifier()));
    workflow
        .rate_with_note(&id, rating, note.unwrap_or_default())
        .await?;

    if let Some(submission) = session.store.get(&id) {
        print_submission(&submission, &session.service);
    }
    Ok(())
}

fn prompt_rating() -> Result<u8> {
    let labels: Vec<&str> = QUICK_RATINGS.iter().map(|(label, _)| *label).collect();
    let picked = Select::new()
        .with_prompt("How did it go?")
        .items(&labels)
        .default(2)
        .interact()
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    Ok(QUICK_RATINGS[picked].1)
}
