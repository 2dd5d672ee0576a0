//! Pull request creation pipeline
//!
//! Parameters are resolved in phases, each one mutating the same
//! [`ParameterSet`]:
//! 1. Defaults - best effort from the local repository
//! 2. Flags - explicit command-line values override defaults
//! 3. Prompts - optional, answers override everything
//!
//! The result is validated once and dispatched once.

mod defaults;
mod dispatch;
mod flags;
mod interactive;
mod params;
mod progress;
mod validate;

pub use defaults::resolve_defaults;
pub use dispatch::{WIP_PREFIX, build_request, dispatch, effective_title};
pub use flags::{FlagValues, apply_flags};
pub use interactive::{
    AnswerValidator, DialoguerPrompter, PromptDescriptor, PromptKind, Prompter, prompt_sequence,
    resolve_interactive,
};
pub use params::{Field, ParameterSet};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use validate::{
    REQUIRED_FIELDS, ValidatedParameters, check_provider, check_repository, split_repository,
    validate,
};

use crate::error::Result;
use crate::git::GitIntrospector;
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestRequest};
use tracing::debug;

/// Resolver pipeline for a single `create` invocation
pub struct CreatePipeline<'a> {
    git: &'a dyn GitIntrospector,
    prompter: Option<&'a dyn Prompter>,
    progress: &'a dyn ProgressCallback,
}

impl<'a> CreatePipeline<'a> {
    /// Pipeline reading defaults from `git`, without prompts
    pub fn new(git: &'a dyn GitIntrospector) -> Self {
        Self {
            git,
            prompter: None,
            progress: &NoopProgress,
        }
    }

    /// Enable interactive prompts
    #[must_use]
    pub fn with_prompter(mut self, prompter: &'a dyn Prompter) -> Self {
        self.prompter = Some(prompter);
        self
    }

    /// Report phase transitions to `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressCallback) -> Self {
        self.progress = progress;
        self
    }

    /// Run every resolution phase and validate the result
    pub async fn resolve(&self, flags: &FlagValues) -> Result<ValidatedParameters> {
        let mut params = ParameterSet::default();

        self.progress.on_phase(Phase::ResolvingDefaults).await;
        let remote = resolve_defaults(self.git, &mut params).await;
        debug!(?params, "defaults resolved");

        self.progress.on_phase(Phase::ApplyingFlags).await;
        apply_flags(&mut params, flags)?;

        if let Some(prompter) = self.prompter {
            self.progress.on_phase(Phase::Prompting).await;
            resolve_interactive(prompter, &mut params)?;
        }

        self.progress.on_phase(Phase::Validating).await;
        Ok(validate(params)?.with_remote_host(remote.as_ref()))
    }

    /// Send a built request to the provider
    pub async fn submit(
        &self,
        request: &PullRequestRequest,
        platform: &dyn PlatformService,
    ) -> Result<PullRequest> {
        self.progress.on_phase(Phase::Creating).await;
        let pr = dispatch(request, platform).await?;
        self.progress.on_created(&pr).await;
        self.progress.on_phase(Phase::Complete).await;
        Ok(pr)
    }
}
