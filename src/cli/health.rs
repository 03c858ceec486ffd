//! Health command - check that the service answers

use crate::cli::Session;
use crate::cli::style::{Stylize, check, cross};
use anstream::{eprintln, println};
use doc_sanitizer::client::SubmissionService;
use doc_sanitizer::error::{Error, Result};

/// Run the health command
///
/// Fails with [`Error::Unhealthy`] when the service reports not ok.
pub async fn run_health(session: &Session) -> Result<()> {
    let base = session.service.base_url().to_string();
    if !session.service.health().await? {
        eprintln!("{} Service at {} is {}", cross(), base.accent(), "down".error());
        return Err(Error::Unhealthy(base));
    }

    println!("{} Service at {} is {}", check(), base.accent(), "up".success());
    Ok(())
}
