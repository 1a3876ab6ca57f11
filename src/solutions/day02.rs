use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 2: Bathroom Security",
    parsed = KeypadInstructions,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2016<2> {}

#[derive(thiserror::Error, Debug)]
enum Day02Error {
    /// Found a character other than `U`, `D`, `L`, `R`.
    #[error("invalid move character: {0:?}")]
    InvalidMove(char),

    /// The keypad layout lacks the key to start on.
    #[error("keypad has no starting key {0:?}")]
    MissingStartKey(char),
}

/*
Input is one line of moves per button of the bathroom code: `U`, `D`, `L`, `R`. Moving starts on
the `5` key and continues from wherever the previous line ended. A move that would leave the keypad
is ignored. The key under the finger at the end of a line is the next button of the code.
*/

#[derive(Debug, Clone, Copy)]
enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Move {
    type Error = Day02Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            other => Err(Day02Error::InvalidMove(other)),
        }
    }
}

struct KeypadInstructions(Vec<Vec<Move>>);

impl ParseData for KeypadInstructions {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut lines = parse_input_lines(input, |_, line| {
            line.trim()
                .chars()
                .map(Move::try_from)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<Vec<Move>>, _>>()?;
        // a blank line has no button of its own
        lines.retain(|moves| !moves.is_empty());
        Ok(Self(lines))
    }
}

/// A keypad layout; spaces are positions without a key.
struct Keypad {
    rows: &'static [&'static [u8]],
}

/// Position on a keypad as (row, column).
type Position = (usize, usize);

impl Keypad {
    const START_KEY: char = '5';

    fn key_at(&self, (row, column): Position) -> Option<char> {
        self.rows
            .get(row)
            .and_then(|keys| keys.get(column))
            .filter(|&&key| key != b' ')
            .map(|&key| char::from(key))
    }

    fn find(&self, key: char) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|&k| char::from(k) == key)
                .map(|column| (row, column))
        })
    }

    /// The position after a move, staying put if the move leaves the keypad.
    fn step(&self, (row, column): Position, step: Move) -> Position {
        let candidate = match step {
            Move::Up => row.checked_sub(1).map(|row| (row, column)),
            Move::Down => Some((row + 1, column)),
            Move::Left => column.checked_sub(1).map(|column| (row, column)),
            Move::Right => Some((row, column + 1)),
        };
        candidate
            .filter(|&position| self.key_at(position).is_some())
            .unwrap_or((row, column))
    }

    fn code(&self, instructions: &KeypadInstructions) -> DynamicResult<String> {
        let mut position = self
            .find(Self::START_KEY)
            .ok_or(Day02Error::MissingStartKey(Self::START_KEY))?;

        let mut code = String::with_capacity(instructions.0.len());
        for line in &instructions.0 {
            position = line
                .iter()
                .fold(position, |position, &step| self.step(position, step));
            if let Some(key) = self.key_at(position) {
                code.push(key);
            }
        }
        Ok(code)
    }
}

/*
For part 1, the keypad is a 3x3 grid of keys 1 through 9.
*/

const SQUARE_KEYPAD: Keypad = Keypad {
    rows: &[b"123", b"456", b"789"],
};

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = KeypadInstructions;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        SQUARE_KEYPAD.code(input)
    }
}

/*
For part 2, the keypad is diamond shaped with keys 1 through 9 and A through D.
*/

const DIAMOND_KEYPAD: Keypad = Keypad {
    rows: &[b"  1  ", b" 234 ", b"56789", b" ABC ", b"  D  "],
};

impl Solution<PartTwo> for Day02 {
    type Input = KeypadInstructions;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        DIAMOND_KEYPAD.code(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"ULL
RRDDD
LURDL
UUUUD
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = KeypadInstructions::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "1985");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = KeypadInstructions::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "5DB3");
        Ok(())
    }

    #[test]
    fn moves_off_keypad_are_ignored() {
        assert_eq!(DIAMOND_KEYPAD.step((2, 0), Move::Left), (2, 0));
        assert_eq!(DIAMOND_KEYPAD.step((2, 0), Move::Up), (2, 0));
        assert_eq!(SQUARE_KEYPAD.step((0, 2), Move::Right), (0, 2));
    }

    #[test]
    fn blank_lines_add_no_button() -> DynamicResult<()> {
        let parsed = KeypadInstructions::parse("ULL\n\nRRDDD\n  \nLURDL\nUUUUD\n\n")?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "1985");
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_move() {
        assert!(KeypadInstructions::parse("UDX\n").is_err());
    }
}
