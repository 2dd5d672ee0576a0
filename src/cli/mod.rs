//! CLI commands
//!
//! Command implementations for the `preq` binary.

mod create;
mod progress;
pub mod style;

pub use create::{CreateArgs, run_create};
