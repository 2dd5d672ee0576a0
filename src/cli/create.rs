//! Create command - resolve parameters and open a pull request

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stream, Stylize, arrow, check, hyperlink_url};
use anstream::println;
use clap::Args;
use preq::create::{CreatePipeline, DialoguerPrompter, FlagValues, build_request};
use preq::error::Result;
use preq::git::GitCli;
use preq::platform::create_platform_service;
use preq::types::PullRequestRequest;
use std::path::Path;

/// Flags for `preq create`
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Repository in form of owner/repo
    #[arg(short, long)]
    repository: Option<String>,

    /// Repository host: bitbucket-cloud, github or gitlab
    #[arg(short, long)]
    provider: Option<String>,

    /// Source branch of your pull request (default checked out branch)
    #[arg(short, long)]
    source: Option<String>,

    /// Destination branch of your pull request (default master, else develop)
    #[arg(short, long)]
    destination: Option<String>,

    /// Title of the pull request (default last commit message)
    #[arg(short, long)]
    title: Option<String>,

    /// Description of the pull request
    #[arg(long)]
    description: Option<String>,

    /// Confirm every parameter through prompts
    #[arg(short, long)]
    interactive: bool,

    /// Close the source branch after merge; `--close=false` keeps it
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    close: Option<bool>,

    /// Mark the pull request as Work-In-Progress
    #[arg(long)]
    wip: bool,

    /// Show the pull request that would be created without creating it
    #[arg(long)]
    dry_run: bool,
}

impl CreateArgs {
    /// Explicit flag values; switches left off count as not supplied
    fn flag_values(&self) -> FlagValues {
        FlagValues {
            repository: self.repository.clone(),
            provider: self.provider.clone(),
            source: self.source.clone(),
            destination: self.destination.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            close_branch: self.close,
            work_in_progress: self.wip.then_some(true),
        }
    }
}

/// Run the create command
pub async fn run_create(path: &Path, args: &CreateArgs) -> Result<()> {
    let git = GitCli::new(path);
    let progress = CliProgress::new();
    let prompter = DialoguerPrompter;

    let mut pipeline = CreatePipeline::new(&git).with_progress(&progress);
    if args.interactive {
        pipeline = pipeline.with_prompter(&prompter);
    }

    let validated = pipeline.resolve(&args.flag_values()).await?;
    let request = build_request(validated);

    if args.dry_run {
        report_dry_run(&request);
        return Ok(());
    }

    let platform = create_platform_service(&request.repository).await?;
    let result = pipeline.submit(&request, platform.as_ref()).await;
    progress.clear();
    let pr = result?;

    println!(
        "{} Created a pull request: {} -> {}",
        check(),
        pr.source.accent(),
        pr.destination.accent()
    );
    println!("   {}", hyperlink_url(Stream::Stdout, &pr.url));

    Ok(())
}

fn report_dry_run(request: &PullRequestRequest) {
    println!("{}", "Dry run - no changes will be made".muted());
    println!(
        "Would create a pull request on {} {}:",
        request.repository.provider.emphasis(),
        request.repository.full_name().accent()
    );
    println!(
        "  {} {} {}",
        request.source.accent(),
        arrow(),
        request.destination.accent()
    );
    println!("  title: {}", request.title);
    if let Some(description) = &request.description {
        println!("  description: {}", description.muted());
    }
    println!(
        "  close source branch: {}",
        if request.close_branch { "yes" } else { "no" }
    );
}
