mod parsers;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::LevelFilter;
use log::error;
use log::info;
use verdict_core::Clause;
use verdict_core::DpllSolver;
use verdict_core::Formula;
use verdict_core::SatisfactionResult;
use verdict_core::branching::BranchingStrategy;
use verdict_core::statistics::configure_statistic_logging;
use verdict_core::statistics::log_statistic;
use verdict_core::statistics::should_log_statistics;

use crate::parsers::dimacs::parse_cnf;
use crate::result::VerdictResult;

#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Args {
    /// The instance to solve, given in the DIMACS CNF format.
    instance_path: PathBuf,

    /// The branching heuristic consulted when no unit or pure literal forces an assignment.
    #[arg(long, value_enum, default_value_t)]
    heuristic: BranchingStrategy,

    /// Run every built-in heuristic sequentially, each over its own copy of the formula, and
    /// report per-heuristic statistics. The heuristics explore different trees but always
    /// agree on the verdict.
    #[arg(long)]
    all_heuristics: bool,

    /// Print solver statistics as DIMACS comment lines.
    #[arg(long)]
    log_statistics: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> VerdictResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose);
    if args.log_statistics {
        // Statistics go on comment lines so the output stays valid DIMACS.
        configure_statistic_logging("c", None);
    }

    let instance = File::open(&args.instance_path)?;
    let clauses = parse_cnf::<Vec<Clause>>(instance)?;
    info!(
        "parsed {} clauses from {}",
        clauses.len(),
        args.instance_path.display()
    );

    let formula = Formula::new(clauses);

    let verdict = if args.all_heuristics {
        let mut verdict = None;
        for strategy in BranchingStrategy::ALL {
            verdict = Some(solve_with(formula.clone(), strategy)?);
        }
        verdict.expect("the strategy family is nonempty")
    } else {
        solve_with(formula, args.heuristic)?
    };

    match verdict {
        SatisfactionResult::Satisfiable(solution) => {
            println!("s SATISFIABLE");
            println!("v {solution} 0");
        }
        SatisfactionResult::Unsatisfiable => {
            println!("s UNSATISFIABLE");
        }
    }

    Ok(())
}

fn solve_with(formula: Formula, strategy: BranchingStrategy) -> VerdictResult<SatisfactionResult> {
    let mut solver = DpllSolver::default();
    let mut heuristic = strategy.create();

    let start = Instant::now();
    let result = solver.solve(formula, heuristic.as_mut())?;
    let elapsed = start.elapsed();

    info!(
        "heuristic {strategy}: {} in {:.3}s after {} recursive calls",
        if result.is_satisfiable() {
            "satisfiable"
        } else {
            "unsatisfiable"
        },
        elapsed.as_secs_f64(),
        solver.statistics().num_recursive_calls(),
    );

    if should_log_statistics() {
        log_statistic("heuristic", strategy);
        solver.log_statistics();
        log_statistic("solveTime", elapsed.as_secs_f64());
    }

    Ok(result)
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("logging successfully configured");
}
