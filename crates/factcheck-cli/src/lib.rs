//! Command definitions and output rendering for the `factcheck` binary.

pub mod cli;
pub mod output;
