//! preq - create pull requests from the command line
//!
//! Resolves pull request parameters from the local git repository, explicit
//! flags and optional interactive prompts, validates them, and submits the
//! request to Bitbucket Cloud, GitHub or GitLab.

pub mod auth;
pub mod create;
pub mod error;
pub mod git;
pub mod platform;
pub mod types;
