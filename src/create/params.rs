//! The parameter set threaded through the create pipeline

use std::fmt;

/// A named field of [`ParameterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Hosting provider identifier
    Provider,
    /// `owner/name`
    Repository,
    /// Source branch
    Source,
    /// Destination branch
    Destination,
    /// Pull request title
    Title,
}

impl Field {
    /// Lowercase field name used in messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Repository => "repository",
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pull request parameters for a single invocation
///
/// Starts empty, is filled in place by each resolution phase and is consumed
/// once validation has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    /// Provider identifier (see [`crate::types::Provider`])
    pub provider: String,
    /// Repository as `owner/name`
    pub repository: String,
    /// Source branch
    pub source: String,
    /// Destination branch
    pub destination: String,
    /// Title, before any work-in-progress prefix
    pub title: String,
    /// Optional pull request body
    pub description: String,
    /// Close the source branch once merged
    pub close_branch: bool,
    /// Mark the pull request as work in progress
    pub work_in_progress: bool,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            provider: String::new(),
            repository: String::new(),
            source: String::new(),
            destination: String::new(),
            title: String::new(),
            description: String::new(),
            close_branch: true,
            work_in_progress: false,
        }
    }
}

impl ParameterSet {
    /// Current value of a string field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Provider => &self.provider,
            Field::Repository => &self.repository,
            Field::Source => &self.source,
            Field::Destination => &self.destination,
            Field::Title => &self.title,
        }
    }

    /// Overwrite a string field
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Provider => self.provider = value,
            Field::Repository => self.repository = value,
            Field::Source => self.source = value,
            Field::Destination => self.destination = value,
            Field::Title => self.title = value,
        }
    }
}
