//! Completeness and format checks
//!
//! The format checks here are shared by the flag overlay, the interactive
//! prompts and the final validation pass.

use crate::create::{Field, ParameterSet};
use crate::error::{Error, Result};
use crate::types::{Provider, RepositoryReference};

/// Order in which required fields are checked
pub const REQUIRED_FIELDS: [Field; 5] = [
    Field::Source,
    Field::Destination,
    Field::Repository,
    Field::Provider,
    Field::Title,
];

/// Split `owner/name` into its two non-empty parts
pub fn split_repository(repository: &str) -> Option<(&str, &str)> {
    match repository.split('/').collect::<Vec<_>>()[..] {
        [owner, name] if !owner.is_empty() && !name.is_empty() => Some((owner, name)),
        _ => None,
    }
}

/// Reject anything that is not `owner/name`
pub fn check_repository(repository: &str) -> Result<()> {
    split_repository(repository)
        .map(|_| ())
        .ok_or_else(|| Error::MalformedRepository(repository.to_string()))
}

/// Parse a provider identifier against the supported set
pub fn check_provider(provider: &str) -> Result<Provider> {
    provider.parse()
}

/// Parameters that passed validation, frozen until dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParameters {
    params: ParameterSet,
    repository: RepositoryReference,
}

impl ValidatedParameters {
    /// The validated parameter set
    pub const fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Target repository derived from provider and `owner/name`
    pub const fn repository(&self) -> &RepositoryReference {
        &self.repository
    }

    /// Take the remote's host when the target is the remote's repository
    ///
    /// A repository named through flags or prompts that differs from the
    /// remote keeps `host` unset and goes to the provider's default host.
    #[must_use]
    pub fn with_remote_host(mut self, remote: Option<&RepositoryReference>) -> Self {
        if let Some(remote) = remote.filter(|r| r.same_repository(&self.repository)) {
            self.repository.host.clone_from(&remote.host);
        }
        self
    }

    /// Consume into the parameter set and repository reference
    pub fn into_parts(self) -> (ParameterSet, RepositoryReference) {
        (self.params, self.repository)
    }
}

/// Check required fields and formats, returning the first violation
///
/// Required fields are checked in [`REQUIRED_FIELDS`] order; only the first
/// missing one is reported.
pub fn validate(params: ParameterSet) -> Result<ValidatedParameters> {
    if let Some(field) = REQUIRED_FIELDS
        .into_iter()
        .find(|f| params.get(*f).is_empty())
    {
        return Err(Error::MissingField(field));
    }

    let (owner, name) = split_repository(&params.repository)
        .ok_or_else(|| Error::MalformedRepository(params.repository.clone()))?;
    let provider = check_provider(&params.provider)?;

    let repository = RepositoryReference {
        provider,
        owner: owner.to_string(),
        name: name.to_string(),
        host: None,
    };

    Ok(ValidatedParameters { params, repository })
}
