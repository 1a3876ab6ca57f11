use std::collections::HashSet;

use aoc_framework::parsing::{parse_with_context, single_line};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 1: No Time for a Taxicab",
    parsed = Instructions,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2016<1> {}

#[derive(thiserror::Error, Debug)]
enum Day01Error {
    /// Instruction doesn't start with a turn letter. Tuple contains the instruction to report in
    /// the error message.
    #[error("expected an instruction starting with 'R' or 'L', found {0:?}")]
    InvalidTurn(String),

    /// Block count after the turn isn't all digits. Tuple contains the instruction to report in
    /// the error message.
    #[error("expected a block count of digits after the turn, found {0:?}")]
    InvalidBlocks(String),

    /// The walk never crosses a location it already visited.
    #[error("no location is visited twice")]
    NoRepeatedLocation,
}

/*
Input is a single line of comma-separated instructions. Each instruction turns 90 degrees left (`L`)
or right (`R`) then walks forward the given number of blocks. The walk starts at the origin facing
north.
*/

#[derive(Debug, Clone, Copy)]
enum Turn {
    Left,
    Right,
}

#[derive(Debug)]
struct Instruction {
    turn: Turn,
    blocks: u32,
}

struct Instructions(Vec<Instruction>);

impl ParseData for Instructions {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let line = single_line(input)?;
        let instructions = line
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| -> DynamicResult<_> {
                let turn = match token.chars().next() {
                    Some('L') => Turn::Left,
                    Some('R') => Turn::Right,
                    _ => return Err(Day01Error::InvalidTurn(token.to_owned()).into()),
                };
                // turn letter is ASCII so slicing after it is on a char boundary
                let digits = &token[1..];
                if !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Day01Error::InvalidBlocks(token.to_owned()).into());
                }
                let blocks = parse_with_context(digits)?;
                Ok(Instruction { turn, blocks })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self(instructions))
    }
}

/// Heading offsets in clockwise order, starting north.
const HEADINGS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Walker state: a position and an index into [`HEADINGS`].
struct Walker {
    position: Point2<i32>,
    heading: usize,
}

impl Walker {
    fn new() -> Self {
        Self {
            position: Point2::origin(),
            heading: 0,
        }
    }

    fn turn(&mut self, turn: Turn) {
        self.heading = match turn {
            Turn::Right => (self.heading + 1) % HEADINGS.len(),
            Turn::Left => (self.heading + HEADINGS.len() - 1) % HEADINGS.len(),
        };
    }

    fn direction(&self) -> Vector2<i32> {
        let (x, y) = HEADINGS[self.heading];
        Vector2::new(x, y)
    }

    fn distance_from_origin(&self) -> u32 {
        self.position.x.unsigned_abs() + self.position.y.unsigned_abs()
    }
}

/*
For part 1, follow all instructions and return the Manhattan distance from the start.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Instructions;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut walker = Walker::new();
        for instruction in &input.0 {
            walker.turn(instruction.turn);
            let step = walker.direction() * i32::try_from(instruction.blocks)?;
            walker.position += step;
        }
        Ok(walker.distance_from_origin())
    }
}

/*
For part 2, the headquarters is the first location visited twice. Every block walked through counts
as visited, not only where instructions end.
*/

impl Solution<PartTwo> for Day01 {
    type Input = Instructions;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut walker = Walker::new();
        let mut visited = HashSet::from([walker.position]);

        for instruction in &input.0 {
            walker.turn(instruction.turn);
            let step = walker.direction();
            for _ in 0..instruction.blocks {
                walker.position += step;
                if !visited.insert(walker.position) {
                    return Ok(walker.distance_from_origin());
                }
            }
        }

        Err(Day01Error::NoRepeatedLocation.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_part_one(input: &str) -> DynamicResult<u32> {
        let parsed = Instructions::parse(input)?;
        <Day01 as Solution<PartOne>>::solve(&parsed)
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        assert_eq!(solve_part_one("R2, L3")?, 5);
        assert_eq!(solve_part_one("R2, R2, R2")?, 2);
        assert_eq!(solve_part_one("R5, L5, R5, R3\n")?, 12);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Instructions::parse("R8, R4, R4, R8")?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn part_two_without_revisit_fails() -> DynamicResult<()> {
        let parsed = Instructions::parse("R2, L3")?;
        assert!(<Day01 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_turn() {
        assert!(Instructions::parse("R2, U3").is_err());
        assert!(Instructions::parse("R2, L-3").is_err());
        assert!(Instructions::parse("R+2").is_err());
        assert!(Instructions::parse("R").is_err());
        assert!(Instructions::parse("").is_err());
    }
}
