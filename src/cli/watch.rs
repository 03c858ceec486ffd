//! Watch command - poll and redraw until interrupted

use crate::cli::Session;
use crate::cli::notice::WatchNotifier;
use crate::cli::style::Stylize;
use anstream::println;
use doc_sanitizer::error::Result;
use doc_sanitizer::poll::PollingController;
use doc_sanitizer::types::SubmissionId;
use std::sync::Arc;

/// Run the watch command
///
/// With an id, returns once that submission is done or failed;
/// otherwise runs until Ctrl-C.
pub async fn run_watch(session: &Session, id: Option<&str>) -> Result<()> {
    let notifier = Arc::new(WatchNotifier::new(
        Arc::clone(&session.store),
        Arc::clone(&session.service),
        id.map(SubmissionId::from),
    ));

    let mut poller = PollingController::new(
        Arc::clone(&session.refresher),
        notifier.clone(),
        session.config.poll_interval,
    );

    println!(
        "{}",
        format!(
            "Polling {} every {}s (Ctrl-C to stop)",
            session.service.base_url(),
            poller.interval().as_secs()
        )
        .muted()
    );
    poller.start();

    tokio::select! {
        res = tokio::signal::ctrl_c() => res?,
        () = notifier.finished.notified(), if id.is_some() => {}
    }

    poller.stop().await;
    Ok(())
}
