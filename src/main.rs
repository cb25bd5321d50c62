#![deny(
    // Overly strict on purpose: less a promise that everything is perfect, more a mechanism to
    // force inline allows wherever we think a lint is wrong, so those spots are easy to audit.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! routegraph demo binary.
//!
//! Generates a random weighted graph, runs a shortest-route query between two vertices, and
//! prints the result. Optionally dumps the generated topology as Graphviz DOT and the computed
//! route as JSON so the run can be inspected (or rendered) by external tooling — all drawing and
//! interaction stays outside the core crate.

use std::fs::File;
use std::io::Write as _;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use routegraph::{
    logging,
    shortest_path_with,
    GraphError,
    RandomGraphGenerator,
    SearchStrategy,
    WeightedGraph,
};
use tracing::{
    info,
    warn,
};

/// Generate a random weighted graph and compute the shortest route between two of its vertices.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of vertices in the generated graph (minimum 2).
    #[arg(short = 'n', long, default_value_t = 10, value_parser = parse_vertex_count)]
    vertices: usize,

    /// Seed for the random graph generator; omit for OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Start vertex index of the query.
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// End vertex index of the query; defaults to the highest index.
    #[arg(short, long)]
    end: Option<usize>,

    /// Use the binary-heap search strategy instead of the dense linear scan.
    #[arg(long)]
    heap: bool,

    /// Optional path to write the generated graph as Graphviz DOT.
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Optional path to write the computed route as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

/// Custom parser for `--vertices` enforcing the graph's minimum size up front, so the failure
/// surfaces as a usage error rather than a runtime one.
fn parse_vertex_count(s: &str) -> Result<usize, String> {
    let count: usize = s.parse().map_err(|_| format!("'{s}' isn't a valid vertex count"))?;
    if count >= 2 {
        Ok(count)
    } else {
        Err(format!("a graph needs at least 2 vertices, got: {count}"))
    }
}

/// Writes `content` to `path`, creating parent directories as needed.
fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::setup(&args.verbosity);

    let mut generator = args.seed.map_or_else(RandomGraphGenerator::from_entropy, RandomGraphGenerator::from_seed);
    let graph: WeightedGraph = generator.generate(args.vertices)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        seed = ?args.seed,
        "generated random graph"
    );

    if let Some(dot_path) = &args.dot {
        write_artifact(dot_path, &graph.to_dot())?;
        info!("graph written to: {}", dot_path.display());
    }

    let end = args.end.unwrap_or(graph.vertex_count() - 1);
    let strategy = if args.heap { SearchStrategy::BinaryHeap } else { SearchStrategy::DenseScan };

    let route = match shortest_path_with(&graph, args.start, end, strategy) {
        Ok(route) => route,
        Err(GraphError::Unreachable { start, end }) => {
            // Coin-flip graphs may be disconnected; that's an answer, not a crash.
            warn!(start, end, "no route exists between the chosen vertices");
            return Ok(());
        },
        Err(e) => return Err(e.into()),
    };

    println!("{}  (total weight {})", route.display_named(&graph), route.total_weight);

    if let Some(json_path) = &args.json {
        write_artifact(json_path, &serde_json::to_string_pretty(&route)?)?;
        info!("route written to: {}", json_path.display());
    }

    Ok(())
}
