//! sanitize - submit documents for text replacement and track them
//!
//! CLI binary over the doc-sanitizer client library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "sanitize")]
#[command(about = "Submit documents with find/replace rules and track their processing")]
#[command(version)]
struct Cli {
    /// Service base address (defaults to DOC_SANITIZER_API or http://127.0.0.1:8000)
    #[arg(long, global = true)]
    api: Option<String>,

    /// Report refreshes and log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF with replacement rules
    Submit {
        /// PDF to upload
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Replacement rule as FIND=REPLACE (repeatable, later duplicates win)
        #[arg(short, long = "replace", value_name = "FIND=REPLACE")]
        replacements: Vec<String>,
    },

    /// List recent submissions
    List {
        /// Maximum number of submissions
        #[arg(long)]
        limit: Option<u32>,

        /// Number of newest submissions to skip
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Rate a submission (1-5); prompts when no rating is given
    Rate {
        /// Submission id
        id: String,

        /// Rating from 1 to 5
        rating: Option<u8>,

        /// Note sent with the rating
        #[arg(long)]
        note: Option<String>,
    },

    /// Poll the service and redraw submissions
    Watch {
        /// Stop once this submission is done or failed
        id: Option<String>,
    },

    /// Download the processed document of a submission
    Download {
        /// Submission id
        id: String,

        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the service is reachable
    Health,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "doc_sanitizer=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = cli::Session::open(cli.api.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Submit { file, replacements } => {
            cli::run_submit(&session, file.as_deref(), &replacements).await?;
        }
        Commands::List { limit, offset } => {
            cli::run_list(&session, limit, offset).await?;
        }
        Commands::Rate { id, rating, note } => {
            cli::run_rate(&session, &id, rating, note.as_deref()).await?;
        }
        Commands::Watch { id } => {
            cli::run_watch(&session, id.as_deref()).await?;
        }
        Commands::Download { id, output } => {
            cli::run_download(&session, &id, output.as_deref()).await?;
        }
        Commands::Health => {
            cli::run_health(&session).await?;
        }
    }

    Ok(())
}
