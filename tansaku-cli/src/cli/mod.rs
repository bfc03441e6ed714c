//! Command-line interface for loading graph descriptions and reporting on
//! them.
//!
//! The single `run` command reads a description file, computes the minimum
//! spanning tree, then runs the selected traversals from one source vertex.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, DEFAULT_MAX_BYTES, ExecutionSummary, RunCommand, TraversalChoice,
    parse_byte_size, render_summary, run_cli,
};
pub use input::{GraphInput, InputError};

#[cfg(test)]
mod test_helpers;
