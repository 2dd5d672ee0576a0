//! Shared test helpers

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_git;
pub mod mock_platform;
pub mod mock_prompter;
