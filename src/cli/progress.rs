//! CLI progress callback with a spinner while the provider is called

use crate::cli::style::spinner_style;
use async_trait::async_trait;
use indicatif::ProgressBar;
use preq::create::{Phase, ProgressCallback};
use preq::types::PullRequest;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Spinner tick interval
const TICK: Duration = Duration::from_millis(80);

/// CLI progress callback
///
/// Phases before the API call are only logged; the call itself shows a
/// spinner on stderr that is cleared once it returns.
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress reporter with no active spinner
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// Stop and erase the spinner, if any
    pub fn clear(&self) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) {
            pb.finish_and_clear();
        }
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.clear();
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        debug!(%phase, "phase");

        match phase {
            Phase::Creating => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(spinner_style());
                pb.set_message(format!("{phase}..."));
                pb.enable_steady_tick(TICK);
                if let Ok(mut spinner) = self.spinner.lock() {
                    *spinner = Some(pb);
                }
            }
            Phase::Complete => self.clear(),
            _ => {}
        }
    }

    async fn on_created(&self, _pr: &PullRequest) {
        self.clear();
    }
}
