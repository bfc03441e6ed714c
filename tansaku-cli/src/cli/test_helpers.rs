//! Small helpers shared across CLI tests.

use std::{fs, io, path::PathBuf};

use tempfile::TempDir;

use super::{Cli, CliError, Command, RunCommand, TraversalChoice, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_description(dir: &TempDir, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join("graph.txt");
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_args(path: PathBuf, source: usize, traversal: TraversalChoice) -> Cli {
    Cli {
        command: Command::Run(RunCommand {
            path,
            source,
            traversal,
            show_weights: false,
            max_bytes: 1 << 30,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
