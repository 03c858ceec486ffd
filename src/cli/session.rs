//! Wiring shared by every command: config, service, store, refresher

use crate::cli::notice::CliNotifier;
use doc_sanitizer::client::HttpSubmissionService;
use doc_sanitizer::config::Config;
use doc_sanitizer::error::Result;
use doc_sanitizer::notify::Notifier;
use doc_sanitizer::store::{Refresher, SubmissionStore};
use doc_sanitizer::workflow::SubmissionWorkflow;
use std::sync::Arc;

/// One process-lifetime client session
pub struct Session {
    /// Effective configuration
    pub config: Config,
    /// HTTP adapter
    pub service: Arc<HttpSubmissionService>,
    /// Cached submissions
    pub store: Arc<SubmissionStore>,
    /// Refresher shared by workflow and poller
    pub refresher: Arc<Refresher>,
    /// Report applied refreshes as well as notices
    pub verbose: bool,
}

impl Session {
    /// Build a session from the environment, with `api` overriding the base address
    pub fn open(api: Option<&str>, verbose: bool) -> Result<Self> {
        let mut config = Config::from_env()?;
        if let Some(api) = api {
            config = config.with_base_url(api)?;
        }

        let service = Arc::new(HttpSubmissionService::new(&config)?);
        let store = Arc::new(SubmissionStore::new());
        let refresher = Arc::new(Refresher::new(
            service.clone(),
            Arc::clone(&store),
            config.page,
        ));

        Ok(Self {
            config,
            service,
            store,
            refresher,
            verbose,
        })
    }

    /// Terminal notifier matching the `-v` flag
    pub const fn notifier(&self) -> CliNotifier {
        if self.verbose {
            CliNotifier::verbose()
        } else {
            CliNotifier::quiet()
        }
    }

    /// Workflow reporting to `notifier`
    pub fn workflow(&self, notifier: Arc<dyn Notifier>) -> SubmissionWorkflow {
        SubmissionWorkflow::new(self.service.clone(), Arc::clone(&self.refresher), notifier)
    }
}
