//! Utility functions and errors for parsing input.

use std::str::FromStr;

use thiserror::Error;

use crate::DynamicError;

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    /// The zero based index of the line that failed.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Parse each line of input with a closure, mapping any line's error with an [`InvalidLine`].
///
/// The closure receives the zero based line index and the line.
///
/// # Errors
///
/// If parsing a line fails, an [`InvalidLine`] error is yielded for it, sourcing the original
/// error.
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> Result<T, E>,
    E: Into<DynamicError>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|error| InvalidLine {
            line_index,
            source: error.into(),
        })
    })
}

/// The input was expected to hold a line but was empty.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("expected a line of input, found none")]
pub struct MissingLine;

/// Get the first line of an input expected to be a single line, trimmed of surrounding whitespace.
///
/// Any lines after the first are ignored.
///
/// # Errors
///
/// Returns [`MissingLine`] if the input has no line or the first line is blank.
pub fn single_line(input: &str) -> Result<&str, MissingLine> {
    input
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or(MissingLine)
}
