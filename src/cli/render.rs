//! Rendering of cached submissions

use crate::cli::style::{DOWNLOAD, Stream, Stylize, hyperlink_url, status_badge};
use anstream::println;
use doc_sanitizer::client::HttpSubmissionService;
use doc_sanitizer::types::Submission;

/// Print a list of submissions, newest first
pub fn print_submissions(submissions: &[Submission], service: &HttpSubmissionService) {
    if submissions.is_empty() {
        println!("{}", "No submissions yet.".muted());
        return;
    }

    for submission in submissions {
        print_submission(submission, service);
    }
}

/// Print one submission
pub fn print_submission(submission: &Submission, service: &HttpSubmissionService) {
    println!(
        "{} {}",
        submission.filename.emphasis(),
        status_badge(submission.status)
    );
    println!(
        "  {} {}",
        format!("id: {} •", submission.id).muted(),
        submission
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .muted()
    );

    if let Some(error) = &submission.error {
        println!("  {}", format!("Error: {error}").error().for_stdout());
    }

    let rating = format!("rating: {}", submission.rating);
    match service.artifact_url(submission) {
        Some(url) => println!(
            "  {DOWNLOAD} {}  {}",
            hyperlink_url(Stream::Stdout, url.as_str()).accent(),
            rating.muted()
        ),
        None => println!("  {}", rating.muted()),
    }
}
