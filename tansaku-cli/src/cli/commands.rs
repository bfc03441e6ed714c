use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tansaku_core::{
    GraphError, GraphErrorCode, PathReport, SpanningForest, WeightMatrix, estimate_graph_bytes,
    format_bytes,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{GraphInput, InputError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tansaku",
    about = "Compute minimum spanning trees and shortest paths over weighted graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph description and report on it.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the graph description file.
    pub path: PathBuf,

    /// Vertex the traversals start from.
    #[arg(long, default_value_t = 0)]
    pub source: usize,

    /// Traversals to report.
    #[arg(long, value_enum, default_value_t = TraversalChoice::All)]
    pub traversal: TraversalChoice,

    /// Print the weight matrix before the results.
    #[arg(long)]
    pub show_weights: bool,

    /// Largest graph allocation to attempt, e.g. `512M` or `2GiB`.
    #[arg(long, default_value = DEFAULT_MAX_BYTES, value_parser = parse_byte_size)]
    pub max_bytes: u64,
}

/// Default for `--max-bytes`.
pub const DEFAULT_MAX_BYTES: &str = "1GiB";

/// Traversal selection for the `run` command.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum TraversalChoice {
    /// Run both Dijkstra and breadth-first search.
    All,
    /// Shortest paths over every edge.
    Dijkstra,
    /// Paths over minimum spanning tree edges only.
    Bfs,
}

impl TraversalChoice {
    const fn includes_dijkstra(self) -> bool {
        matches!(self, Self::All | Self::Dijkstra)
    }

    const fn includes_bfs(self) -> bool {
        matches!(self, Self::All | Self::Bfs)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Dijkstra => "dijkstra",
            Self::Bfs => "bfs",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph description could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph description is malformed.
    #[error("invalid graph description `{path}`: {source}")]
    Input {
        /// Path of the description.
        path: PathBuf,
        /// Parse or build failure.
        #[source]
        source: InputError,
    },
    /// The declared graph would exceed the memory budget.
    #[error(
        "graph of {vertices} vertices needs about {} but the limit is {}",
        format_bytes(*estimated),
        format_bytes(*limit)
    )]
    MemoryLimitExceeded {
        /// Declared vertex count.
        vertices: usize,
        /// Estimated allocation in bytes.
        estimated: u64,
        /// Configured `--max-bytes`.
        limit: u64,
    },
    /// A graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable graph error code behind this failure, if any.
    #[must_use]
    pub fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            Self::Input { source, .. } => source.graph_code(),
            Self::Io { .. } | Self::MemoryLimitExceeded { .. } => None,
        }
    }
}

/// Results of executing the `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Weight matrix, present when requested.
    pub weights: Option<WeightMatrix>,
    /// Minimum spanning forest of the loaded graph.
    pub spanning_tree: SpanningForest,
    /// Dijkstra report, present when selected.
    pub dijkstra: Option<PathReport>,
    /// Breadth-first report, present when selected.
    pub bfs: Option<PathReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or a traversal fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tansaku_cli::cli::{Cli, Command, RunCommand, TraversalChoice, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "vertices 3\nedge 0 1 1\nedge 1 2 2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         source: 0,
///         traversal: TraversalChoice::All,
///         show_weights: false,
///         max_bytes: 1 << 20,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.spanning_tree.total_weight(), 3.0);
/// assert!(summary.dijkstra.is_some() && summary.bfs.is_some());
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        source = command.source,
        traversal = command.traversal.label(),
        vertices = field::Empty,
        edges = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        source,
        traversal,
        show_weights,
        max_bytes,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));

    let input = read_input(&path)?;
    let estimated = estimate_graph_bytes(input.vertex_count());
    if estimated > max_bytes {
        return Err(CliError::MemoryLimitExceeded {
            vertices: input.vertex_count(),
            estimated,
            limit: max_bytes,
        });
    }
    let mut graph = input.build().map_err(|source| CliError::Input {
        path: path.clone(),
        source,
    })?;
    span.record("vertices", graph.vertex_count());
    span.record("edges", graph.edges().len());

    let spanning_tree = graph.minimum_spanning_tree();
    let dijkstra = traversal
        .includes_dijkstra()
        .then(|| graph.dijkstra(source))
        .transpose()?;
    let bfs = traversal
        .includes_bfs()
        .then(|| graph.bfs(source))
        .transpose()?;

    info!(
        cost = spanning_tree.total_weight(),
        components = spanning_tree.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        weights: show_weights.then(|| graph.weights().clone()),
        spanning_tree,
        dijkstra,
        bfs,
    })
}

/// Parses a byte count with an optional binary unit suffix.
///
/// Accepts a plain integer or one followed by `K`, `M`, `G` or `T`, each
/// optionally trailed by `B` or `iB`, in any case. All units are powers of
/// 1024.
///
/// # Errors
/// Returns a message for empty input, unknown suffixes, non-integer amounts
/// and values that overflow `u64`.
///
/// # Examples
/// ```
/// use tansaku_cli::cli::parse_byte_size;
///
/// assert_eq!(parse_byte_size("512M"), Ok(512 * 1024 * 1024));
/// assert_eq!(parse_byte_size("2GiB"), Ok(2 * 1024 * 1024 * 1024));
/// assert!(parse_byte_size("1.5G").is_err());
/// ```
pub fn parse_byte_size(raw: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(format!("`{raw}` does not start with a byte count"));
    }
    let shift = match suffix.to_ascii_lowercase().as_str() {
        "" | "b" => 0,
        "k" | "kb" | "kib" => 10,
        "m" | "mb" | "mib" => 20,
        "g" | "gb" | "gib" => 30,
        "t" | "tb" | "tib" => 40,
        _ => return Err(format!("`{raw}` has an unknown unit suffix `{suffix}`")),
    };
    let amount: u64 = digits
        .parse()
        .map_err(|err| format!("`{raw}` is not a valid byte count: {err}"))?;
    amount
        .checked_mul(1_u64 << shift)
        .ok_or_else(|| format!("`{raw}` overflows a 64-bit byte count"))
}

fn read_input(path: &Path) -> Result<GraphInput, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    GraphInput::parse(&text).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer`.
///
/// Prints the weight matrix when present, the spanning tree cost, then one
/// section per traversal.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tansaku_cli::cli::{Cli, Command, RunCommand, TraversalChoice, render_summary, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "vertices 2\nedge 0 1 1.25\n")?;
/// let summary = run_cli(Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         source: 1,
///         traversal: TraversalChoice::Bfs,
///         show_weights: false,
///         max_bytes: 1 << 20,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "minimum spanning tree cost: 1.25\n\
///      bfs from 1:\n\
///      Distance from 1 to 0 =   1.25 travelling via 1 0\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if let Some(weights) = &summary.weights {
        write!(writer, "{weights}")?;
    }
    writeln!(
        writer,
        "minimum spanning tree cost: {:.2}",
        summary.spanning_tree.total_weight()
    )?;
    for (label, report) in [("dijkstra", &summary.dijkstra), ("bfs", &summary.bfs)] {
        if let Some(report) = report {
            writeln!(writer, "{label} from {}:", report.source())?;
            write!(writer, "{report}")?;
        }
    }
    Ok(())
}
