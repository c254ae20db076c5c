//! Subcommand implementations.
//!
//! Each returns the number of command lines that failed.

pub mod exec;
pub mod run;
pub mod shell;
