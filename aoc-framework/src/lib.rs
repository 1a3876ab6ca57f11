//! Framework of traits and utilities for Advent of Code.
//!
//! # Quick Start
//!
//! 1. Define your input type and implement [`ParseData`]:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData};
//! #
//! struct Triangles(Vec<[u16; 3]>);
//!
//! impl ParseData for Triangles {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let rows = input
//!             .lines()
//!             .map(|line| -> DynamicResult<[u16; 3]> {
//!                 let mut sides = [0; 3];
//!                 for (side, value) in sides.iter_mut().zip(line.split_whitespace()) {
//!                     *side = value.parse()?;
//!                 }
//!                 Ok(sides)
//!             })
//!             .collect::<DynamicResult<_>>()?;
//!         Ok(Self(rows))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for your part:
//!
//! ```
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! # struct Triangles(Vec<[u16; 3]>);
//! #
//! struct Day03;
//!
//! impl Solution<PartOne> for Day03 {
//!     type Input = Triangles;
//!     type Output = usize;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//! ```
//!
//! 3. Use the [`runner`] module to execute your solution.
//!
//! # Solution with `Input = str`
//!
//! ```
//! use aoc_framework::{DynamicResult, PartTwo, Solution};
//!
//! struct Day06;
//!
//! impl Solution<PartTwo> for Day06 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

pub mod parsing;
pub mod runner;

mod private {
    /// A private sealed trait used to prevent external implementations of public traits.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    One,
    Two,
}

impl PartKind {
    /// The part's number as it's written in puzzle text, `1` or `2`.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// The part's number spelled out, `"one"` or `"two"`.
    #[must_use]
    pub fn word(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
        }
    }
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

/// A string did not name a part.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("expected part \"1\" or \"2\", found {0:?}")]
pub struct ParsePartKindError(String);

impl FromStr for PartKind {
    type Err = ParsePartKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            other => Err(ParsePartKindError(other.to_owned())),
        }
    }
}

/// A part was requested from a solution that doesn't implement it.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{part} is not implemented for {name}")]
pub struct PartNotAvailable {
    /// The name of the solution missing the part.
    pub name: String,
    /// The requested part.
    pub part: PartKind,
}

/// A marker trait used to identify a part for a solution.
///
/// Types implementing this trait are used as generic parameters to [`Solution<P>`] to indicate
/// which part the solution implements.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A generic trait for a solution that solve for a [`Part`].
///
/// It is expected solutions implement for the marker structs [`PartOne`] or [`PartTwo`].
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// For direct string input, set to `str`.
    type Input: ?Sized;

    /// The output data type returned from the solution.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// A solution can encounter varying errors while solving, like invalid input or a puzzle with
    /// no answer. It is returned as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A trait for data structures that are created by parsing string input.
///
/// Solutions can be passed parsed data constructed through this trait by setting
/// [`Solution::Input`] to the implementing struct.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_kind_parses_digits_and_words() {
        assert_eq!("1".parse(), Ok(PartKind::One));
        assert_eq!("two".parse(), Ok(PartKind::Two));
        assert!("3".parse::<PartKind>().is_err());
    }

    #[test]
    fn part_kind_displays_number() {
        assert_eq!(PartKind::Two.to_string(), "Part 2");
        assert_eq!(PartKind::One.word(), "one");
    }
}
