//! Overlay of explicit command-line values

use crate::create::ParameterSet;
use crate::create::validate::{check_provider, check_repository};
use crate::error::{Error, Result};

/// Explicitly supplied values, `None` when a flag was not given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagValues {
    /// `--repository`
    pub repository: Option<String>,
    /// `--provider`
    pub provider: Option<String>,
    /// `--source`
    pub source: Option<String>,
    /// `--destination`
    pub destination: Option<String>,
    /// `--title`
    pub title: Option<String>,
    /// `--description`
    pub description: Option<String>,
    /// `--close`
    pub close_branch: Option<bool>,
    /// `--wip`
    pub work_in_progress: Option<bool>,
}

/// A flag counts as supplied only when non-empty
fn supplied(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn overlay(field: &mut String, value: Option<&String>) {
    if let Some(v) = supplied(value) {
        *field = v.to_string();
    }
}

/// Apply supplied flags over `params`
///
/// Provider and repository must be given together; when they are, the
/// repository must be `owner/name` and the provider must be supported.
/// Values already in `params` do not count towards that rule.
pub fn apply_flags(params: &mut ParameterSet, flags: &FlagValues) -> Result<()> {
    let repository = supplied(flags.repository.as_ref());
    let provider = supplied(flags.provider.as_ref());

    match (repository, provider) {
        (Some(repository), Some(provider)) => {
            check_repository(repository)?;
            check_provider(provider)?;
            params.repository = repository.to_string();
            params.provider = provider.to_string();
        }
        (None, None) => {}
        _ => return Err(Error::CoupledFlagViolation),
    }

    overlay(&mut params.source, flags.source.as_ref());
    overlay(&mut params.destination, flags.destination.as_ref());
    overlay(&mut params.title, flags.title.as_ref());
    overlay(&mut params.description, flags.description.as_ref());

    if let Some(close) = flags.close_branch {
        params.close_branch = close;
    }
    if let Some(wip) = flags.work_in_progress {
        params.work_in_progress = wip;
    }

    Ok(())
}
