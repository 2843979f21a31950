//! Command-line front end for the gridlock solver.
//!
//! Reads a puzzle file, runs one configured search (or, with `--compare`,
//! the whole strategy matrix) and prints the outcome.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use gridlock_core::{Board, Digit, Position};
use gridlock_solver::{
    SearchMethod, SolveReport, SolverConfig, ValueOrdering, VariableOrdering, solve,
};
use log::info;

/// Solve a 9×9 puzzle with a configurable constraint-satisfaction search.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: digits 1-9 are clues, `0`, `.`, or a space is a blank
    /// cell, commas are ignored.
    puzzle: PathBuf,

    /// Consistency check to run after each trial assignment.
    #[arg(long, value_enum, default_value_t = MethodArg::Pruning)]
    method: MethodArg,

    /// Cell-selection heuristic.
    #[arg(long, value_enum, default_value_t = VariableArg::FirstEmpty)]
    variable: VariableArg,

    /// Value-ordering heuristic.
    #[arg(long, value_enum, default_value_t = ValueArg::Natural)]
    value: ValueArg,

    /// Run AC-3 once before the search, filling forced cells. Ignored with
    /// `--method mac`, which always starts from arc-consistent domains.
    #[arg(long)]
    preprocess: bool,

    /// Run every strategy combination on the puzzle and print a comparison
    /// table instead of a single solve.
    #[arg(long, conflicts_with_all = ["method", "variable", "value", "preprocess"])]
    compare: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    /// Plain backtracking over legal candidates.
    Pruning,
    /// Undo an assignment as soon as any empty cell loses all options.
    ForwardChecking,
    /// Re-run AC-3 on cloned domains after every assignment.
    Mac,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariableArg {
    /// First unfilled cell in row-major order.
    FirstEmpty,
    /// Cell with the fewest remaining values.
    Mrv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValueArg {
    /// Ascending value order.
    Natural,
    /// Least-constraining value first.
    Lcv,
}

impl From<MethodArg> for SearchMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Pruning => Self::Pruning,
            MethodArg::ForwardChecking => Self::ForwardChecking,
            MethodArg::Mac => Self::MaintainedArcConsistency,
        }
    }
}

impl From<VariableArg> for VariableOrdering {
    fn from(value: VariableArg) -> Self {
        match value {
            VariableArg::FirstEmpty => Self::FirstEmpty,
            VariableArg::Mrv => Self::MinimumRemainingValues,
        }
    }
}

impl From<ValueArg> for ValueOrdering {
    fn from(value: ValueArg) -> Self {
        match value {
            ValueArg::Natural => Self::Natural,
            ValueArg::Lcv => Self::LeastConstrainingValue,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    /// The puzzle file could not be read.
    #[display("failed to read puzzle file: {_0}")]
    Io(std::io::Error),
    /// The puzzle file contains a character with no meaning in the format.
    #[display("unexpected character {ch:?} in puzzle file")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// The puzzle file does not describe exactly 81 cells.
    #[display("expected 81 cells in puzzle file, found {count}")]
    CellCount {
        /// Number of cells actually found.
        count: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.puzzle)?;
    let board = parse_puzzle(&text)?;
    info!("loaded puzzle from {}", args.puzzle.display());

    if args.compare {
        compare(&board);
        return Ok(());
    }

    let config = SolverConfig {
        method: args.method.into(),
        variable_ordering: args.variable.into(),
        value_ordering: args.value.into(),
        preprocess: args.preprocess,
    };
    let report = solve(&board, config);

    println!("Strategy: {config}");
    println!();
    if report.solved() {
        println!("Solved board:");
        println!("{}", report.board());
    } else {
        println!("No solution exists for this puzzle.");
    }
    println!();
    println!("Steps:      {}", report.steps());
    println!("Backtracks: {}", report.backtracks());
    println!("Runtime:    {} ms", report.runtime_ms());
    Ok(())
}

/// Runs the full strategy matrix over copies of the same board and prints
/// one row per configuration.
fn compare(board: &Board) {
    let runs: Vec<(SolverConfig, SolveReport)> = SolverConfig::all()
        .into_iter()
        .map(|config| (config, solve(board, config)))
        .collect();

    let width = runs
        .iter()
        .map(|(config, _)| config.to_string().len())
        .max()
        .unwrap_or(0);

    println!(
        "{:<width$}  {:>6}  {:>10}  {:>10}  {:>10}",
        "strategy", "solved", "steps", "backtracks", "runtime ms"
    );
    for (config, report) in &runs {
        println!(
            "{:<width$}  {:>6}  {:>10}  {:>10}  {:>10}",
            config.to_string(),
            report.solved(),
            report.steps(),
            report.backtracks(),
            report.runtime_ms()
        );
    }
}

/// Parses the puzzle file format: digits are clues, `0`, `.`, and space are
/// blanks, commas are skipped. Each non-empty line is one row and
/// contributes at most nine cells, so trailing spaces do not shift the grid.
fn parse_puzzle(text: &str) -> Result<Board, CliError> {
    let mut board = Board::new();
    let mut count = 0_usize;
    let mut row = 0_u8;

    for line in text.lines() {
        let mut col = 0_u8;
        for ch in line.chars() {
            if col == 9 {
                break;
            }
            let digit = match ch {
                '1'..='9' => Digit::new(ch as u8 - b'0'),
                '0' | '.' | ' ' => None,
                ',' => continue,
                _ => return Err(CliError::UnexpectedCharacter { ch }),
            };
            if row < 9
                && let Some(digit) = digit
            {
                board.place(Position::new(col, row), digit);
            }
            count += 1;
            col += 1;
        }
        if col > 0 {
            row += 1;
        }
    }

    if count != 81 {
        return Err(CliError::CellCount { count });
    }
    Ok(board)
}
