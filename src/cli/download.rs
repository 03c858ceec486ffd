//! Download command - fetch the processed artifact of a submission

use crate::cli::Session;
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use doc_sanitizer::client::SubmissionService;
use doc_sanitizer::error::Result;
use doc_sanitizer::types::SubmissionId;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Run the download command
///
/// Writes to `output`, or `<id>.sanitized.pdf` in the current directory.
pub async fn run_download(session: &Session, id: &str, output: Option<&Path>) -> Result<()> {
    let id = SubmissionId::from(id);
    let submission = session.service.get(&id).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Downloading {}...", submission.filename));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let bytes = session.service.download(&submission).await;
    spinner.finish_and_clear();
    let bytes = bytes?;

    let path = output.map_or_else(|| PathBuf::from(format!("{id}.sanitized.pdf")), Path::to_path_buf);
    tokio::fs::write(&path, &bytes).await?;

    println!(
        "{} Saved {} ({} bytes)",
        check(),
        path.display().accent(),
        bytes.len()
    );
    Ok(())
}
