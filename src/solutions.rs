//! Solutions implemented for Advent of Code 2016.
//!
//! This module provides [`run_day`] to run a solution by its day, [`solve`] to answer a single
//! part, and [`get_solution`] to answer a part straight from an [`InputStore`].
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2016<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add the day to the `solution_table!` invocation below `MATCH SOLUTIONS HERE`.

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use std::error::Error as _;

use aoc_framework::runner::{OutputHandler, SolutionRunner};
use aoc_framework::{DynamicResult, PartKind};
use log::{error, warn};
use thiserror::Error;

use crate::input::InputStore;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;

/// The puzzle year, used in messages.
pub const YEAR: u16 = 2016;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day.
///
/// Use [`#[solution_runner]`][aoc_framework::runner::solution_runner] for convenience:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// use aoc_framework::runner::solution_runner;
/// use aoc_framework::{PartOne, Solution};
///
/// struct Day01;
/// impl Solution<PartOne> for Day01 {
///     /* ... */
/// }
///
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// impl super::AdventOfCode2016<1> {}
/// ```
struct AdventOfCode2016<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(pub u8);

/// Expands to a `match` on a day, calling a [`SolutionRunner`] method of the day's
/// [`AdventOfCode2016`], or evaluating the fallback for unlisted days.
macro_rules! solution_table {
    ($day:expr, $method:ident $args:tt, [$($listed:literal),*], $fallback:expr) => {
        match $day {
            $($listed => AdventOfCode2016::<$listed>::$method $args,)*
            _ => $fallback,
        }
    };
}

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    part: Option<PartKind>,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    // --- MATCH SOLUTIONS HERE ---
    solution_table!(
        day,
        run(input, handler, timed, part),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        Err(DayNotAvailable(day).into())
    )
}

/// Answer one part of a day's solution.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or solving is propagated.
///
/// # Returns
///
/// The formatted answer, or `None` if there's no solution for the day and part.
pub fn solve(day: u8, part: PartKind, input: &str) -> DynamicResult<Option<String>> {
    solution_table!(
        day,
        answer(input, part),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        Ok(None)
    )
}

/// Whether a solution is available for the day and part.
#[must_use]
pub fn is_available(day: u8, part: PartKind) -> bool {
    solution_table!(
        day,
        has_part(part),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        false
    )
}

fn warn_not_developed(day: u8, part: PartKind) {
    warn!(
        "Solution for year {YEAR}, day {day} part {} has not yet been developed.",
        part.word()
    );
}

/// Answer one part of a day's solution, reading the day's input from the store.
///
/// The input is only read once the day and part are known to have a solution. Nothing is raised
/// to the caller: a missing solution is logged as a warning, an unreadable input or a failing
/// solution is logged as an error, and `None` is returned.
pub fn get_solution(inputs: &InputStore, day: u8, part: PartKind) -> Option<String> {
    if !is_available(day, part) {
        warn_not_developed(day, part);
        return None;
    }

    let input = inputs.read(day);
    match solve(day, part, &input) {
        Ok(Some(answer)) => Some(answer),
        Ok(None) => {
            warn_not_developed(day, part);
            None
        }
        Err(err) => {
            error!("solution for day {day} {part} failed: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::fs;
    use std::time::Duration;

    use tempfile::tempdir;

    use super::*;

    #[derive(Default)]
    struct Collected(Vec<String>);

    impl OutputHandler for Collected {
        fn solution_name(&mut self, name: &str) {
            self.0.push(name.to_owned());
        }

        fn parse_start(&mut self) {}

        fn parse_end(&mut self, _duration_opt: Option<Duration>) {}

        fn part_start(&mut self, _part: PartKind) {}

        fn part_output(
            &mut self,
            _part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.0.push(output.to_string());
        }
    }

    #[test]
    fn run_day_outputs_name_and_answers() -> DynamicResult<()> {
        let mut handler = Collected::default();
        run_day(1, None, "R8, R4, R4, R8\n", &mut handler, false)?;
        assert_eq!(handler.0, ["Day 1: No Time for a Taxicab", "8", "4"].map(String::from));
        Ok(())
    }

    #[test]
    fn run_day_runs_selected_part() -> DynamicResult<()> {
        let mut handler = Collected::default();
        run_day(1, Some(PartKind::Two), "R8, R4, R4, R8\n", &mut handler, false)?;
        assert_eq!(handler.0, ["Day 1: No Time for a Taxicab", "4"].map(String::from));
        Ok(())
    }

    #[test]
    fn run_day_rejects_unknown_day() {
        let mut handler = Collected::default();
        let Err(error) = run_day(25, None, "", &mut handler, false) else {
            panic!("day 25 is not solved");
        };
        assert_eq!(error.to_string(), "no solution available for day 25");
        assert!(handler.0.is_empty());
    }

    #[test]
    fn solve_answers_each_part() -> DynamicResult<()> {
        assert_eq!(solve(6, PartKind::One, "ab\nab\ncd\n")?, Some("ab".to_owned()));
        assert_eq!(solve(6, PartKind::Two, "ab\nab\ncd\n")?, Some("cd".to_owned()));
        assert_eq!(solve(19, PartKind::One, "")?, None);
        Ok(())
    }

    #[test]
    fn availability_follows_table() {
        assert!(is_available(1, PartKind::One));
        assert!(is_available(10, PartKind::Two));
        assert!(!is_available(11, PartKind::One));
        assert!(!is_available(25, PartKind::Two));
    }

    #[test]
    fn get_solution_reads_from_store() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("03.txt"), "5 10 25\n3 4 5\n")?;
        let inputs = InputStore::new(dir.path());

        assert_eq!(get_solution(&inputs, 3, PartKind::One), Some("1".to_owned()));
        Ok(())
    }

    #[test]
    fn get_solution_is_absent_without_raising() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let inputs = InputStore::new(dir.path());

        // unsolved day
        assert_eq!(get_solution(&inputs, 20, PartKind::Two), None);
        // missing input leaves the solver with nothing to parse
        assert_eq!(get_solution(&inputs, 1, PartKind::One), None);
        Ok(())
    }
}
