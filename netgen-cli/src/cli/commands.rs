//! Command implementations and argument parsing for the netgen CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use netgen_core::{
    AnalysisError, BARABASI_ALBERT_LABEL, BarabasiAlbertParams, BfsMetrics, ComparisonConfig,
    ComparisonReport, DEFAULT_BETA, DEFAULT_RNG_SEED, GeneratorError, Graph, PathLengthMode,
    WATTS_STROGATZ_LABEL, WattsStrogatzParams, barabasi_albert_graph, run_comparison,
    watts_strogatz_graph,
};
use netgen_providers_edgelist::{EdgeListError, EdgeListFormat, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netgen",
    about = "Generate random networks and compare them with a reference network."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a seeded model graph and print its edge list.
    #[command(subcommand)]
    Generate(GenerateCommand),
    /// Compare a reference edge list against both models.
    Compare(CompareArgs),
}

/// Models accepted by the `generate` command.
#[derive(Debug, Subcommand, Clone)]
pub enum GenerateCommand {
    /// Watts–Strogatz small-world rewiring of a ring lattice.
    Ws(WattsStrogatzArgs),
    /// Barabási–Albert preferential attachment.
    Ba(BarabasiAlbertArgs),
}

/// Arguments of `generate ws`.
#[derive(Debug, Args, Clone)]
pub struct WattsStrogatzArgs {
    /// Number of nodes on the ring.
    #[arg(long)]
    pub nodes: usize,

    /// Target degree of the initial lattice.
    #[arg(long)]
    pub degree: usize,

    /// Probability of rewiring each lattice edge.
    #[arg(long)]
    pub beta: f64,

    /// Seed of the random stream.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,
}

/// Arguments of `generate ba`.
#[derive(Debug, Args, Clone)]
pub struct BarabasiAlbertArgs {
    /// Number of nodes in the final graph.
    #[arg(long)]
    pub nodes: usize,

    /// Edges each new node attaches with.
    #[arg(long = "edges")]
    pub edges_per_node: usize,

    /// Seed of the random stream.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,
}

/// Arguments of `compare`.
#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Path to the reference edge list.
    pub path: PathBuf,

    /// Layout of the edge list.
    #[arg(long, value_enum, default_value_t = InputFormat::Csv)]
    pub format: InputFormat,

    /// Override name for the network (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Rewiring probability of the Watts–Strogatz model.
    #[arg(long, default_value_t = DEFAULT_BETA)]
    pub beta: f64,

    /// Base seed both model seeds are derived from.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,

    /// Estimate path lengths from this many BFS sources instead of all nodes.
    #[arg(long = "path-samples")]
    pub path_samples: Option<usize>,
}

/// Edge-list layouts understood by `compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Comma-separated with a header row.
    Csv,
    /// Tab-separated with `#` comments.
    Snap,
    /// Whitespace-separated with `#` comments.
    Whitespace,
}

impl InputFormat {
    fn label(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Snap => "snap",
            Self::Whitespace => "whitespace",
        }
    }

    fn edge_list_format(self) -> EdgeListFormat {
        match self {
            Self::Csv => EdgeListFormat::csv_with_header(),
            Self::Snap => EdgeListFormat::snap(),
            Self::Whitespace => EdgeListFormat::whitespace(),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the reference network.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Model generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// The comparison pipeline failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl CliError {
    /// Stable machine-readable code of the underlying failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList(err) => err.code(),
            Self::Generator(err) => err.code().as_str(),
            Self::Analysis(err) => err.code().as_str(),
        }
    }

    /// Generator code when the failure originated in a model generator.
    #[must_use]
    pub fn generator_code(&self) -> Option<&'static str> {
        match self {
            Self::Generator(err) => Some(err.code().as_str()),
            Self::Analysis(err) => err.generator_code().map(|code| code.as_str()),
            Self::Io { .. } | Self::EdgeList(_) => None,
        }
    }
}

/// A generated model graph with the parameters that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    /// Model label.
    pub model: &'static str,
    /// Seed of the random stream.
    pub seed: u64,
    /// The generated graph.
    pub graph: Graph,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Output of `generate`.
    Generated(GeneratedGraph),
    /// Output of `compare`.
    Compared(ComparisonReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, generation, or analysis fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netgen_cli::cli::{
/// #     BarabasiAlbertArgs, Cli, Command, ExecutionSummary, GenerateCommand, run_cli,
/// # };
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand::Ba(BarabasiAlbertArgs {
///         nodes: 5,
///         edges_per_node: 2,
///         seed: 1,
///     })),
/// };
/// let ExecutionSummary::Generated(generated) = run_cli(cli)? else {
///     panic!("generate returns a graph");
/// };
/// assert_eq!(generated.graph.edge_count(), 7);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            run_generate(generate).map(ExecutionSummary::Generated)
        }
        Command::Compare(args) => {
            span.record("command", field::display("compare"));
            run_compare(args).map(ExecutionSummary::Compared)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(model = field::Empty, nodes = field::Empty, seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GeneratedGraph, CliError> {
    let span = Span::current();
    let generated = match command {
        GenerateCommand::Ws(args) => {
            span.record("model", field::display(WATTS_STROGATZ_LABEL));
            span.record("nodes", args.nodes);
            span.record("seed", args.seed);
            let params =
                WattsStrogatzParams::new(args.nodes, args.degree, args.beta)?.with_rng_seed(args.seed);
            GeneratedGraph {
                model: WATTS_STROGATZ_LABEL,
                seed: args.seed,
                graph: watts_strogatz_graph(&params)?,
            }
        }
        GenerateCommand::Ba(args) => {
            span.record("model", field::display(BARABASI_ALBERT_LABEL));
            span.record("nodes", args.nodes);
            span.record("seed", args.seed);
            let params = BarabasiAlbertParams::new(args.nodes, args.edges_per_node)?
                .with_rng_seed(args.seed);
            GeneratedGraph {
                model: BARABASI_ALBERT_LABEL,
                seed: args.seed,
                graph: barabasi_albert_graph(&params)?,
            }
        }
    };
    info!(
        model = generated.model,
        edges = generated.graph.edge_count(),
        "command completed"
    );
    Ok(generated)
}

#[instrument(
    name = "cli.compare",
    err,
    skip(args),
    fields(path = field::Empty, format = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_compare(args: CompareArgs) -> Result<ComparisonReport, CliError> {
    let CompareArgs {
        path,
        format,
        name,
        beta,
        seed,
        path_samples,
    } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("format", field::display(format.label()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let network_name = derive_network_name(&path, name.as_deref());
    let reader = open_edge_list_reader(&path)?;
    let provider =
        EdgeListProvider::try_from_reader(network_name, reader, format.edge_list_format())?;
    let config = ComparisonConfig::new().with_beta(beta).with_seed(seed);
    let metrics = BfsMetrics::new().with_path_mode(path_mode(path_samples, seed));
    let report = run_comparison(provider.graph(), provider.name(), &config, &metrics)?;
    info!(
        network = provider.name(),
        nodes = report.plan().nodes(),
        "command completed"
    );
    Ok(report)
}

fn path_mode(samples: Option<usize>, seed: u64) -> PathLengthMode {
    samples.map_or(PathLengthMode::Exact, |sources| PathLengthMode::Sampled {
        sources,
        seed,
    })
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_network_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "network".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer`.
///
/// Generated graphs are written as `#`-prefixed summary lines followed by one
/// `u\tv` line per edge; comparisons as a tab-separated table.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netgen_cli::cli::{ExecutionSummary, GeneratedGraph, render_summary};
/// # use netgen_core::Graph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::with_nodes(2);
/// graph.add_edge(0, 1)?;
/// let summary = ExecutionSummary::Generated(GeneratedGraph {
///     model: "WS Model",
///     seed: 3,
///     graph,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("0\t1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated(generated) => {
            writeln!(writer, "# model: {}", generated.model)?;
            writeln!(writer, "# seed: {}", generated.seed)?;
            writeln!(writer, "# nodes: {}", generated.graph.node_count())?;
            writeln!(writer, "# edges: {}", generated.graph.edge_count())?;
            for (left, right) in generated.graph.edges() {
                writeln!(writer, "{left}\t{right}")?;
            }
        }
        ExecutionSummary::Compared(report) => {
            writeln!(writer, "{}", report.comparison())?;
        }
    }
    Ok(())
}
