use std::collections::HashSet;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 7: Internet Protocol Version 7",
    parsed = Addresses,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2016<7> {}

#[derive(thiserror::Error, Debug)]
enum Day07Error {
    /// Brackets don't pair up or nest. Tuple contains the address to report in the error message.
    #[error("unbalanced hypernet brackets in address {0:?}")]
    UnbalancedBrackets(String),
}

/*
Input lists IPv7 addresses, one per line. Sequences inside square brackets are hypernet sequences;
the rest are supernet sequences.
*/

#[derive(Debug, Default)]
struct Address {
    supernets: Vec<String>,
    hypernets: Vec<String>,
}

impl Address {
    fn parse_line(line: &str) -> Result<Self, Day07Error> {
        let unbalanced = || Day07Error::UnbalancedBrackets(line.to_owned());

        let mut address = Self::default();
        let mut rest = line.trim();
        while !rest.is_empty() {
            match rest.split_once('[') {
                Some((supernet, after)) => {
                    let (hypernet, after) = after.split_once(']').ok_or_else(unbalanced)?;
                    if supernet.contains(']') || hypernet.contains('[') {
                        return Err(unbalanced());
                    }
                    address.push_supernet(supernet);
                    address.hypernets.push(hypernet.to_owned());
                    rest = after;
                }
                None => {
                    if rest.contains(']') {
                        return Err(unbalanced());
                    }
                    address.push_supernet(rest);
                    rest = "";
                }
            }
        }
        Ok(address)
    }

    fn push_supernet(&mut self, supernet: &str) {
        if !supernet.is_empty() {
            self.supernets.push(supernet.to_owned());
        }
    }
}

struct Addresses(Vec<Address>);

impl ParseData for Addresses {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let addresses = parse_input_lines(input, |_, line| Address::parse_line(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(addresses))
    }
}

/*
For part 1, an address supports TLS when a supernet sequence has an ABBA (`xyyx` with `x` and `y`
different) and no hypernet sequence does. Count them.
*/

fn has_abba(sequence: &str) -> bool {
    sequence
        .as_bytes()
        .windows(4)
        .any(|window| window[0] != window[1] && window[0] == window[3] && window[1] == window[2])
}

impl Address {
    fn supports_tls(&self) -> bool {
        self.supernets.iter().any(|supernet| has_abba(supernet))
            && !self.hypernets.iter().any(|hypernet| has_abba(hypernet))
    }
}

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Addresses;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|address| address.supports_tls())
            .count())
    }
}

/*
For part 2, an address supports SSL when a supernet sequence has an ABA (`xyx` with `x` and `y`
different) and a hypernet sequence has the matching BAB (`yxy`). Count them.
*/

/// The `(x, y)` pairs of every `xyx` pattern in a sequence.
fn aba_pairs(sequence: &str) -> impl Iterator<Item = (u8, u8)> {
    sequence
        .as_bytes()
        .windows(3)
        .filter(|window| window[0] != window[1] && window[0] == window[2])
        .map(|window| (window[0], window[1]))
}

impl Address {
    fn supports_ssl(&self) -> bool {
        let babs: HashSet<(u8, u8)> = self
            .hypernets
            .iter()
            .flat_map(|hypernet| aba_pairs(hypernet))
            .collect();

        self.supernets
            .iter()
            .flat_map(|supernet| aba_pairs(supernet))
            .any(|(outer, inner)| babs.contains(&(inner, outer)))
    }
}

impl Solution<PartTwo> for Day07 {
    type Input = Addresses;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|address| address.supports_ssl())
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Addresses::parse(
            r"abba[mnop]qrst
abcd[bddb]xyyx
aaaa[qwer]tyui
ioxxoj[asdfgh]zxcvbn
",
        )?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Addresses::parse(
            r"aba[bab]xyz
xyx[xyx]xyx
aaa[kek]eke
zazbz[bzb]cdb
",
        )?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn splits_supernets_and_hypernets() -> Result<(), Day07Error> {
        let address = Address::parse_line("ab[cd]ef[gh]")?;
        assert_eq!(address.supernets, ["ab", "ef"]);
        assert_eq!(address.hypernets, ["cd", "gh"]);
        Ok(())
    }

    #[test]
    fn parse_rejects_unbalanced_brackets() {
        assert!(Address::parse_line("ab[cd").is_err());
        assert!(Address::parse_line("ab]cd").is_err());
        assert!(Address::parse_line("a[b[c]]d").is_err());
    }
}
