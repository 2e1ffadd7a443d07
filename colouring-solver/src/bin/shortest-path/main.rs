use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colouring_solver::pathfinding::read_pathfinding_file;
use colouring_solver::pathfinding::shortest_path;
use colouring_solver::pathfinding::Heuristic;
use colouring_solver::pathfinding::PathfindingParseError;
use colouring_solver::pathfinding::SearchReport;
use log::error;
use log::info;
use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
enum ShortestPathError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance file was invalid, more details: {0}")]
    InvalidInstance(#[from] PathfindingParseError),
}

#[derive(Debug, Parser)]
#[command(version, about, arg_required_else_help = true)]
struct Args {
    /// The instances to search. Every non-empty line which does not start with '#' is one of:
    ///  - 'S,<id>' for the start vertex,
    ///  - 'D,<id>' for the goal vertex,
    ///  - '<id>,<cell>' for a vertex at coordinate (cell / 10, cell % 10),
    ///  - '<u>,<v>,<w>' for an undirected edge with non-negative integer weight w.
    #[clap(verbatim_doc_comment, required = true)]
    instance_paths: Vec<PathBuf>,

    /// The heuristics to search with, in order; may be given multiple times. Defaults to all of
    /// them.
    #[arg(long = "heuristic", value_enum)]
    heuristics: Vec<Heuristic>,

    /// Enables log message output on stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), ShortestPathError> {
    let args = Args::parse();
    configure_logging(args.verbose);

    let heuristics = if args.heuristics.is_empty() {
        Heuristic::ALL.to_vec()
    } else {
        args.heuristics
    };

    // All instances are read up front, so a malformed file produces no partial report.
    let instances = args
        .instance_paths
        .iter()
        .map(read_pathfinding_file)
        .collect::<Result<Vec<_>, _>>()?;

    let mut stdout = std::io::stdout().lock();
    for (path, instance) in args.instance_paths.iter().zip(&instances) {
        info!(
            "Searching {} from {} to {}",
            path.display(),
            instance.start,
            instance.goal
        );
        writeln!(stdout, "INSTANCE: {}", path.display())?;

        for &heuristic in &heuristics {
            let result = shortest_path(&instance.graph, instance.start, instance.goal, heuristic);
            writeln!(stdout)?;
            writeln!(stdout, "{}", SearchReport::new(heuristic, &result))?;
        }
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
