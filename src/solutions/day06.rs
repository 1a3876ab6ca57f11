use std::collections::BTreeMap;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 6: Signals and Noise",
    parsed = ColumnTallies,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2016<6> {}

#[derive(thiserror::Error, Debug)]
enum Day06Error {
    /// Messages must share a length to line up by column.
    #[error("expected message length matching first line ({expected}), found {found}")]
    MismatchedLength { expected: usize, found: usize },
}

/*
Input is a list of equal length messages, repeated with noise. Each column is tallied separately.
*/

/// Letter counts per message column. A sorted map keeps ties in alphabetical order.
struct ColumnTallies(Vec<BTreeMap<char, usize>>);

impl ParseData for ColumnTallies {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut tallies: Vec<BTreeMap<char, usize>> = Vec::new();
        let mut width_opt = None;

        parse_input_lines(input, |_, line| {
            let line = line.trim();
            let width = line.chars().count();
            match width_opt {
                Some(expected) if expected != width => {
                    return Err(Day06Error::MismatchedLength {
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
                None => {
                    width_opt = Some(width);
                    tallies.resize_with(width, BTreeMap::new);
                }
            }

            for (tally, letter) in tallies.iter_mut().zip(line.chars()) {
                *tally.entry(letter).or_default() += 1;
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        Ok(Self(tallies))
    }
}

impl ColumnTallies {
    /// Pick a letter from each column's tally, with the first of equally ranked letters winning.
    fn message_by<F>(&self, mut pick: F) -> String
    where
        F: FnMut(&BTreeMap<char, usize>) -> Option<char>,
    {
        self.0.iter().filter_map(|tally| pick(tally)).collect()
    }
}

/*
For part 1, the error-corrected message is the most common letter in each column.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = ColumnTallies;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let message = input.message_by(|tally| {
            // `max_by_key` keeps the last maximum, so scan in reverse to keep the earliest letter
            tally
                .iter()
                .rev()
                .max_by_key(|&(_, &count)| count)
                .map(|(&letter, _)| letter)
        });
        Ok(message)
    }
}

/*
For part 2, the message is encoded with a modified repetition code: the least common letter in each
column.
*/

impl Solution<PartTwo> for Day06 {
    type Input = ColumnTallies;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let message = input.message_by(|tally| {
            tally
                .iter()
                .min_by_key(|&(_, &count)| count)
                .map(|(&letter, _)| letter)
        });
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"eedadn
drvtee
eandsr
raavrd
atevrs
tsrnev
sdttsa
rasrtv
nssdts
ntnada
svetve
tesnvt
vntsnd
vrdear
dvrsen
enarar
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = ColumnTallies::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "easter");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = ColumnTallies::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "advent");
        Ok(())
    }

    #[test]
    fn ties_break_alphabetically() -> DynamicResult<()> {
        let parsed = ColumnTallies::parse("ba\nab\n")?;
        assert_eq!(<Day06 as Solution<PartOne>>::solve(&parsed)?, "aa");
        assert_eq!(<Day06 as Solution<PartTwo>>::solve(&parsed)?, "aa");
        Ok(())
    }

    #[test]
    fn parse_rejects_uneven_lines() {
        assert!(ColumnTallies::parse("abc\nab\n").is_err());
    }
}
