use std::fmt::{self, Display};

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 8: Two-Factor Authentication",
    parsed = Operations,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2016<8> {}

#[derive(thiserror::Error, Debug)]
enum Day08Error {
    /// Line isn't a `rect` or `rotate` operation. Tuple contains the source string to report in
    /// the error message.
    #[error("unknown screen operation: {0:?}")]
    UnknownOperation(String),

    /// An operation reaches past the screen's edges.
    #[error("{operation:?} does not fit a {width}x{height} screen")]
    OutOfBounds {
        operation: Operation,
        width: usize,
        height: usize,
    },
}

/*
Input is a list of operations on a small screen of pixels, all starting off:
- `rect AxB` turns on the pixels of the `A` wide and `B` tall rectangle at the top left.
- `rotate row y=A by B` shifts the pixels of row `A` right by `B`, wrapping around.
- `rotate column x=A by B` shifts the pixels of column `A` down by `B`, wrapping around.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Rect { width: usize, height: usize },
    RotateRow { row: usize, by: usize },
    RotateColumn { column: usize, by: usize },
}

struct Operations(Vec<Operation>);

impl ParseData for Operations {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        const OPERATION_PATTERN: &str =
            r"^(?:rect (\d+)x(\d+)|rotate row y=(\d+) by (\d+)|rotate column x=(\d+) by (\d+))$";

        let operation_re = Regex::new(OPERATION_PATTERN).expect("pattern should be valid");
        let operations = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let captures = operation_re
                .captures(line.trim())
                .ok_or_else(|| Day08Error::UnknownOperation(line.to_owned()))?;
            let number = |index: usize| parse_with_context::<usize>(&captures[index]);

            let operation = if captures.get(1).is_some() {
                Operation::Rect {
                    width: number(1)?,
                    height: number(2)?,
                }
            } else if captures.get(3).is_some() {
                Operation::RotateRow {
                    row: number(3)?,
                    by: number(4)?,
                }
            } else {
                Operation::RotateColumn {
                    column: number(5)?,
                    by: number(6)?,
                }
            };
            Ok(operation)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(operations))
    }
}

/// A grid of pixels, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Screen {
    rows: Vec<Vec<bool>>,
}

impl Screen {
    const WIDTH: usize = 50;
    const HEIGHT: usize = 6;

    fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![false; width]; height],
        }
    }

    fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn apply(&mut self, operation: Operation) -> Result<(), Day08Error> {
        let (width, height) = (self.width(), self.height());
        let out_of_bounds = || Day08Error::OutOfBounds {
            operation,
            width,
            height,
        };

        match operation {
            Operation::Rect {
                width: rect_width,
                height: rect_height,
            } => {
                if rect_width > width || rect_height > height {
                    return Err(out_of_bounds());
                }
                for row in &mut self.rows[..rect_height] {
                    row[..rect_width].fill(true);
                }
            }
            Operation::RotateRow { row, by } => {
                let pixels = self.rows.get_mut(row).ok_or_else(out_of_bounds)?;
                pixels.rotate_right(by % width);
            }
            Operation::RotateColumn { column, by } => {
                if column >= width {
                    return Err(out_of_bounds());
                }
                let mut pixels: Vec<bool> = self.rows.iter().map(|row| row[column]).collect();
                pixels.rotate_right(by % height);
                for (row, pixel) in self.rows.iter_mut().zip(pixels) {
                    row[column] = pixel;
                }
            }
        }
        Ok(())
    }

    fn run(mut self, operations: &Operations) -> Result<Self, Day08Error> {
        for &operation in &operations.0 {
            self.apply(operation)?;
        }
        Ok(self)
    }

    fn lit_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&lit| lit).count()
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                write!(f, "{}", if lit { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

/*
For part 1, the screen is 50 pixels wide and 6 tall. Count the lit pixels after all operations.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = Operations;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let screen = Screen::new(Screen::WIDTH, Screen::HEIGHT).run(input)?;
        Ok(screen.lit_count())
    }
}

/*
For part 2, the lit pixels spell out the code, so the answer is the screen itself.
*/

impl Solution<PartTwo> for Day08 {
    type Input = Operations;
    type Output = Screen;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(Screen::new(Screen::WIDTH, Screen::HEIGHT).run(input)?)
    }
}
