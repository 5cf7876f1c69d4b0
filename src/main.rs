use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::info;

use simplesat::solver::{Heuristic as SolverHeuristic, Solver, SolverConfig};
use simplesat::Verdict;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    FirstFit,
    Dlis,
}

impl From<HeuristicArg> for SolverHeuristic {
    fn from(arg: HeuristicArg) -> SolverHeuristic {
        match arg {
            HeuristicArg::FirstFit => SolverHeuristic::FirstFit,
            HeuristicArg::Dlis => SolverHeuristic::Dlis,
        }
    }
}

/// A CDCL SAT solver over DIMACS CNF input.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to a DIMACS-formatted CNF file.
    path: PathBuf,

    /// Decision heuristic to drive the search.
    #[arg(long, value_enum, default_value_t = HeuristicArg::FirstFit)]
    heuristic: HeuristicArg,

    /// Raise the log level (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .init();

    let contents = match std::fs::read_to_string(&cli.path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("failed to read {}: {err}", cli.path.display());
            return ExitCode::from(1);
        }
    };

    let clauses = match simplesat::dimacs::parse(&contents) {
        Ok(clauses) => clauses,
        Err(err) => {
            eprintln!("failed to parse {}: {err}", cli.path.display());
            return ExitCode::from(1);
        }
    };

    let config = SolverConfig { heuristic: cli.heuristic.into() };
    let mut solver = Solver::from_named_clauses(clauses, config);

    info!("solving {}", cli.path.display());
    match solver.solve() {
        Ok(Verdict::Sat) => {
            println!("SAT");
            let assignment = solver.assignment().expect("SAT verdict always carries an assignment");
            let mut names: Vec<&str> = assignment.iter().map(|(name, _)| name).collect();
            names.sort_by_key(|name| name.parse::<u64>().unwrap_or(u64::MAX));
            for name in names {
                let value = assignment.get(name).expect("name came from this assignment");
                print!("{}{} ", if value { "" } else { "-" }, name);
            }
            println!("0");
            ExitCode::from(10)
        }
        Ok(Verdict::Unsat) => {
            println!("UNSAT");
            ExitCode::from(20)
        }
        Err(err) => {
            eprintln!("solver error: {err}");
            ExitCode::from(1)
        }
    }
}
