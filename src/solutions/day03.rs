use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 3: Squares With Three Sides",
    parsed = SideRows,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2016<3> {}

#[derive(thiserror::Error, Debug)]
enum Day03Error {
    /// A line doesn't hold three sides. Tuple contains the count found.
    #[error("expected three side lengths, found {0}")]
    ExpectedThreeSides(usize),

    /// Rows can't be grouped by three for reading columns. Tuple contains the row count.
    #[error("reading triangles by column needs rows in groups of three, found {0} rows")]
    IncompleteColumnGroup(usize),
}

/*
Input lists three whitespace-separated side lengths per line.
*/

/// Side lengths; observed 3 digit numbers from input.
type Side = u16;

struct SideRows(Vec<[Side; 3]>);

impl ParseData for SideRows {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let sides: Vec<Side> = line
                .split_whitespace()
                .map(parse_with_context)
                .collect::<Result<_, _>>()?;
            let row: [Side; 3] = sides
                .try_into()
                .map_err(|sides: Vec<Side>| Day03Error::ExpectedThreeSides(sides.len()))?;
            Ok(row)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rows))
    }
}

/// A triangle is possible when every pair of sides is longer than the remaining side.
fn is_possible_triangle(sides: [Side; 3]) -> bool {
    let mut sorted = sides.map(u32::from);
    sorted.sort_unstable();
    sorted[0] + sorted[1] > sorted[2]
}

/*
For part 1, each row is a triangle. Count the possible ones.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = SideRows;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let count = input
            .0
            .iter()
            .filter(|&&sides| is_possible_triangle(sides))
            .count();
        Ok(count)
    }
}

/*
For part 2, triangles are listed vertically: each column of every group of three rows is a triangle.
*/

impl SideRows {
    fn column_triangles(&self) -> Result<Vec<[Side; 3]>, Day03Error> {
        if !self.0.len().is_multiple_of(3) {
            return Err(Day03Error::IncompleteColumnGroup(self.0.len()));
        }

        let triangles = self
            .0
            .chunks_exact(3)
            .flat_map(|group| {
                (0..3).map(move |column| [group[0][column], group[1][column], group[2][column]])
            })
            .collect();
        Ok(triangles)
    }
}

impl Solution<PartTwo> for Day03 {
    type Input = SideRows;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let count = input
            .column_triangles()?
            .into_iter()
            .filter(|&sides| is_possible_triangle(sides))
            .count();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"101 301 501
102 302 502
103 303 503
201 401 601
202 402 602
203 403 603
";

    #[test]
    fn impossible_triangle_example() {
        assert!(!is_possible_triangle([5, 10, 25]));
        assert!(is_possible_triangle([3, 4, 5]));
        assert!(!is_possible_triangle([1, 2, 3]));
    }

    #[test]
    fn part_one_counts_rows() -> DynamicResult<()> {
        let parsed = SideRows::parse("  5  10  25\n  3   4   5\n")?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = SideRows::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn part_two_requires_groups_of_three() -> DynamicResult<()> {
        let parsed = SideRows::parse("3 4 5\n3 4 5\n")?;
        assert!(<Day03 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn parse_rejects_wrong_side_count() {
        assert!(SideRows::parse("3 4\n").is_err());
    }
}
