//! Functions and traits for running solutions.
//!
//! # Quick Start
//!
//! A structure or impl-block can be annotated with the [`#[solution_runner]`][solution_runner]
//! attribute macro with appropriate properties:
//!
//! ```
//! # use aoc_framework::runner::{solution_runner};
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! struct Day01Runner;
//!
//! // or
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! impl Day01 {}
//! ```
//!
//! Every runner function takes an optional [`PartKind`] selecting a single part to run; `None` runs
//! every part the solution implements.

use std::fmt::Display;
use std::time::Duration;

use crate::{
    DynamicResult, ParseData, Part, PartKind, PartNotAvailable, PartOne, PartTwo, Solution,
};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// A trait for an output events handler.
///
/// When a solution runs, the steps of running the solution leads to events to output through a
/// handler as feedback and logging.
pub trait OutputHandler {
    /// Called to output the name of the solution, at the start of running the solution.
    fn solution_name(&mut self, name: &str);

    /// Called when the solution starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished.
    ///
    /// The duration taken to parse is optionally passed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a solution part starts, with a [`PartKind`] to identify the part.
    fn part_start(&mut self, part: PartKind);

    /// Called when a part finishes to output the result, with a [`PartKind`] to identify the part.
    ///
    /// The duration taken to run the part is optionally passed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Measure the duration of an expression.
///
/// The macro evaluates the given expression once and returns a tuple of the expression's result and
/// the elapsed [`Duration`][std::time::Duration].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// A macro to optionally measure the duration of an expression.
///
/// Returns a tuple of the expression's result and the elapsed duration when `$timed` is `true`,
/// otherwise `None` for the duration.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Whether a part selection includes the given part.
fn selects(selection: Option<PartKind>, part: PartKind) -> bool {
    selection.is_none_or(|selected| selected == part)
}

/// Error for a half solution asked to run its missing second part.
fn missing_part_two(name: &str) -> PartNotAvailable {
    PartNotAvailable {
        name: name.to_owned(),
        part: PartKind::Two,
    }
}

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Solve a part and format its output.
fn answer_part<S, P>(input: &S::Input) -> DynamicResult<String>
where
    P: Part,
    S: Solution<P>,
{
    Ok(S::solve(input)?.to_string())
}

/// Run a solution that only implements part one and accepts string input.
///
/// # Errors
///
/// Returns [`PartNotAvailable`] if part two is selected. Any dynamically dispatched error from the
/// solution is propagated.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
    part: Option<PartKind>,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    if part == Some(PartKind::Two) {
        return Err(missing_part_two(name).into());
    }
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)
}

/// Run a solution that implements both parts and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
    part: Option<PartKind>,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    if selects(part, PartKind::One) {
        run_part::<S1, PartOne>(input, handler, timed)?;
    }
    if selects(part, PartKind::Two) {
        run_part::<S2, PartTwo>(input, handler, timed)?;
    }
    Ok(())
}

/// Run a solution that implements part one and has a parse data step for input.
///
/// # Errors
///
/// Returns [`PartNotAvailable`] if part two is selected. Any dynamically dispatched error from
/// parsing or the solution is propagated.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
    part: Option<PartKind>,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    if part == Some(PartKind::Two) {
        return Err(missing_part_two(name).into());
    }
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Run a solution that implements both parts and has a parse data step for input.
///
/// Input is parsed once, before any selected part runs.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
    part: Option<PartKind>,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    if selects(part, PartKind::One) {
        run_part::<S1, PartOne>(&parsed, handler, timed)?;
    }
    if selects(part, PartKind::Two) {
        run_part::<S2, PartTwo>(&parsed, handler, timed)?;
    }
    Ok(())
}

/// Answer a part of a solution that only implements part one and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
///
/// # Returns
///
/// The formatted answer, or `None` when part two is asked for.
pub fn answer_half_solution<S1>(input: &str, part: PartKind) -> DynamicResult<Option<String>>
where
    S1: Solution<PartOne, Input = str>,
{
    match part {
        PartKind::One => answer_part::<S1, PartOne>(input).map(Some),
        PartKind::Two => Ok(None),
    }
}

/// Answer a part of a solution that implements both parts and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
pub fn answer_full_solution<S1, S2>(input: &str, part: PartKind) -> DynamicResult<Option<String>>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    let answer = match part {
        PartKind::One => answer_part::<S1, PartOne>(input)?,
        PartKind::Two => answer_part::<S2, PartTwo>(input)?,
    };
    Ok(Some(answer))
}

/// Answer a part of a solution that implements part one and has a parse data step for input.
///
/// Input isn't parsed when part two is asked for.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution is propagated.
pub fn answer_parsed_half_solution<D, S1>(
    input: &str,
    part: PartKind,
) -> DynamicResult<Option<String>>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    match part {
        PartKind::One => {
            let parsed = D::parse(input)?;
            answer_part::<S1, PartOne>(&parsed).map(Some)
        }
        PartKind::Two => Ok(None),
    }
}

/// Answer a part of a solution that implements both parts and has a parse data step for input.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution is propagated.
pub fn answer_parsed_full_solution<D, S1, S2>(
    input: &str,
    part: PartKind,
) -> DynamicResult<Option<String>>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    let parsed = D::parse(input)?;
    let answer = match part {
        PartKind::One => answer_part::<S1, PartOne>(&parsed)?,
        PartKind::Two => answer_part::<S2, PartTwo>(&parsed)?,
    };
    Ok(Some(answer))
}

/// A trait for solutions that can be run.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution, outputting events through the handler.
    ///
    /// # Arguments
    ///
    /// - `input` - The input string to solve.
    /// - `handler` - The output handler to output events to.
    /// - `timed` - A flag to measure the time to process steps then output the elapsed times to the
    ///   handler.
    /// - `part` - A single part to run, or `None` to run all implemented parts.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(
        input: &str,
        handler: &mut dyn OutputHandler,
        timed: bool,
        part: Option<PartKind>,
    ) -> DynamicResult<()>;

    /// Solve a single part and return its formatted answer.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from parsing or solving is propagated.
    ///
    /// # Returns
    ///
    /// `None` if the solution doesn't implement the part.
    fn answer(input: &str, part: PartKind) -> DynamicResult<Option<String>>;

    /// Whether the solution implements the part, checked without any input.
    fn has_part(part: PartKind) -> bool;
}
