use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 9: Explosives in Cyberspace",
    parsed = CompressedFile,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2016<9> {}

#[derive(thiserror::Error, Debug)]
enum Day09Error {
    /// A marker is opened without a closing parenthesis. Tuple contains the marker position.
    #[error("unterminated marker at position {0}")]
    UnterminatedMarker(usize),

    /// Marker text isn't `AxB`. Tuple contains the text between the parentheses.
    #[error("expected marker pattern \"(AxB)\", found {0:?}")]
    InvalidMarker(String),

    /// A marker repeats more characters than remain.
    #[error("marker at position {position} repeats {length} characters, only {remaining} follow")]
    MarkerOverrun {
        position: usize,
        length: usize,
        remaining: usize,
    },

    /// Decompressed length doesn't fit a `u64`.
    #[error("decompressed length overflowed")]
    Overflow,
}

/*
Input is a compressed file; whitespace is ignored. A marker `(AxB)` means the next `A` characters
after the marker are repeated `B` times. The marker itself is not part of the decompressed output.
*/

struct CompressedFile(Vec<u8>);

impl ParseData for CompressedFile {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(
            input.bytes().filter(|b| !b.is_ascii_whitespace()).collect(),
        ))
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Marker {
    length: usize,
    repeat: u64,
    /// Bytes taken by the marker text, parentheses included.
    width: usize,
}

/// Read the marker starting at the `(` at `position`.
fn read_marker(data: &[u8], position: usize) -> Result<Marker, Day09Error> {
    let close = data[position..]
        .iter()
        .position(|&b| b == b')')
        .ok_or(Day09Error::UnterminatedMarker(position))?;
    let text = String::from_utf8_lossy(&data[position + 1..position + close]);

    let invalid = || Day09Error::InvalidMarker(text.to_string());
    let (length, repeat) = text.split_once('x').ok_or_else(invalid)?;
    Ok(Marker {
        length: parse_with_context(length).map_err(|_| invalid())?,
        repeat: parse_with_context(repeat).map_err(|_| invalid())?,
        width: close + 1,
    })
}

/// Decompressed length of `data`, measuring repeated sections with `section_length`.
fn decompressed_length<F>(data: &[u8], mut section_length: F) -> Result<u64, Day09Error>
where
    F: FnMut(&[u8]) -> Result<u64, Day09Error>,
{
    let mut total: u64 = 0;
    let mut position = 0;

    while position < data.len() {
        let added = if data[position] == b'(' {
            let marker = read_marker(data, position)?;
            let start = position + marker.width;
            let remaining = data.len() - start;
            if marker.length > remaining {
                return Err(Day09Error::MarkerOverrun {
                    position,
                    length: marker.length,
                    remaining,
                });
            }

            let section = &data[start..start + marker.length];
            position = start + marker.length;
            section_length(section)?
                .checked_mul(marker.repeat)
                .ok_or(Day09Error::Overflow)?
        } else {
            position += 1;
            1
        };
        total = total.checked_add(added).ok_or(Day09Error::Overflow)?;
    }

    Ok(total)
}

/*
For part 1, markers inside repeated sections are plain data. Find the decompressed length.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = CompressedFile;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let length = decompressed_length(&input.0, |section| {
            u64::try_from(section.len()).map_err(|_| Day09Error::Overflow)
        })?;
        Ok(length)
    }
}

/*
For part 2, markers inside repeated sections are decompressed too. The output is far too large to
build, so only its length is counted.
*/

fn recursive_length(data: &[u8]) -> Result<u64, Day09Error> {
    decompressed_length(data, recursive_length)
}

impl Solution<PartTwo> for Day09 {
    type Input = CompressedFile;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(recursive_length(&input.0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_one(input: &str) -> DynamicResult<u64> {
        <Day09 as Solution<PartOne>>::solve(&CompressedFile::parse(input)?)
    }

    fn solve_two(input: &str) -> DynamicResult<u64> {
        <Day09 as Solution<PartTwo>>::solve(&CompressedFile::parse(input)?)
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        assert_eq!(solve_one("ADVENT")?, 6);
        assert_eq!(solve_one("A(1x5)BC")?, 7);
        assert_eq!(solve_one("(3x3)XYZ")?, 9);
        assert_eq!(solve_one("A(2x2)BCD(2x2)EFG")?, 11);
        assert_eq!(solve_one("(6x1)(1x3)A")?, 6);
        assert_eq!(solve_one("X(8x2)(3x3)ABCY")?, 18);
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        assert_eq!(solve_two("(3x3)XYZ")?, 9);
        assert_eq!(solve_two("X(8x2)(3x3)ABCY")?, 20);
        assert_eq!(solve_two("(27x12)(20x12)(13x14)(7x10)(1x12)A")?, 241_920);
        assert_eq!(
            solve_two("(25x3)(3x3)ABC(2x3)XY(5x2)PQRSTX(18x9)(3x2)TWO(5x7)SEVEN")?,
            445
        );
        Ok(())
    }

    #[test]
    fn whitespace_is_ignored() -> DynamicResult<()> {
        assert_eq!(solve_one("A(1x5)B C\n")?, 7);
        Ok(())
    }

    #[test]
    fn reads_marker_width() -> Result<(), Day09Error> {
        let marker = read_marker(b"A(10x2)B", 1)?;
        assert_eq!(
            marker,
            Marker {
                length: 10,
                repeat: 2,
                width: 6
            }
        );
        Ok(())
    }

    #[test]
    fn malformed_markers_fail() {
        assert!(solve_one("(3x3XYZ").is_err());
        assert!(solve_one("(3y3)XYZ").is_err());
        assert!(solve_one("(5x2)AB").is_err());
    }
}
