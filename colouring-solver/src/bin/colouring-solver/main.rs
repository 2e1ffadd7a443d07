mod result;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colouring_solver::core::colouring_assert_simple;
use colouring_solver::core::convert_case::Case;
use colouring_solver::core::options::SearchOptions;
use colouring_solver::core::options::ValueSelection;
use colouring_solver::core::options::VariableSelection;
use colouring_solver::core::parsers::read_instance_file;
use colouring_solver::core::results::SatisfactionResult;
use colouring_solver::core::statistics::configure_statistic_logging;
use colouring_solver::core::Solver;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::SolverError;
use result::SolverResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve. Every non-empty line which does not start with '#' is one of:
    ///  - 'colors=K' to set the number of available colours (exactly once),
    ///  - 'u,v' to declare an edge between the vertices u and v,
    ///  - 'u' to declare a vertex without edges.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The heuristic which selects the next vertex to colour.
    #[arg(long, value_enum, default_value_t)]
    variable_selection: VariableSelection,

    /// The heuristic which orders the colours tried for the selected vertex.
    #[arg(long, value_enum, default_value_t)]
    value_selection: ValueSelection,

    /// Reduce the domain of a tentatively coloured vertex to its colour before arc consistency
    /// runs, which lets arc consistency prune the colour from all uncoloured neighbours.
    ///
    /// Without this flag, arc consistency only prunes based on vertices whose domain was already
    /// reduced to a single colour.
    #[arg(long)]
    propagate_assignments: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// The statistics are printed to stdout after the colouring, each on a line prefixed with
    /// '%%%colouring-stat:'.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,

    /// Enables log message output from the solver on stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging(
            "%%%colouring-stat:",
            Some("%%%colouring-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
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
    info!("Logging successfully configured");
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

fn run() -> SolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    if colouring_solver::core::asserts::COLOURING_ASSERT_LEVEL_DEFINITION
        >= colouring_solver::core::asserts::COLOURING_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            colouring_solver::core::asserts::COLOURING_ASSERT_LEVEL_DEFINITION
        );
    }

    if args.instance_path.is_dir() {
        return Err(SolverError::invalid_instance(args.instance_path.display()));
    }

    let instance = read_instance_file(&args.instance_path)?;
    info!(
        "Read {} with {} vertices, {} edges and {} colours",
        args.instance_path.display(),
        instance.graph.num_variables(),
        instance.graph.num_edges(),
        instance.palette_size
    );

    let options = SearchOptions {
        variable_selection: args.variable_selection,
        value_selection: args.value_selection,
        propagate_assignments: args.propagate_assignments,
    };
    let mut solver = Solver::with_options(instance.graph, instance.palette_size, options);

    let result = solver.satisfy();

    let mut stdout = std::io::stdout().lock();
    match &result {
        SatisfactionResult::Satisfiable(solution) => {
            colouring_assert_simple!(
                solution.is_complete_for(solver.graph()),
                "The solution does not colour every vertex"
            );
            colouring_assert_simple!(
                solution.violated_constraints(solver.graph()).is_empty(),
                "The solution gives adjacent vertices the same colour"
            );

            for (label, colour) in solution.iter() {
                writeln!(stdout, "Var {label} -> Color {colour}")?;
            }
        }
        SatisfactionResult::Unsatisfiable => writeln!(stdout, "failure")?,
    }
    stdout.flush()?;
    drop(stdout);

    solver.log_statistics();

    Ok(())
}
