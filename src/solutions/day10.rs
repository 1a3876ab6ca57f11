use std::collections::HashMap;
use std::collections::hash_map::Entry;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use log::debug;
use regex::Regex;

#[solution_runner(
    name = "Day 10: Balance Bots",
    parsed = Factory,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2016<10> {}

#[derive(thiserror::Error, Debug)]
enum Day10Error {
    /// Line isn't a value or a give instruction. Tuple contains the source string to report in
    /// the error message.
    #[error("unknown instruction: {0:?}")]
    UnknownInstruction(String),

    /// A bot is given two rules.
    #[error("bot {0} has more than one rule for giving chips")]
    DuplicateRule(BotId),

    /// A bot with two chips has nowhere to send them.
    #[error("bot {0} holds two chips but has no rule for giving them")]
    MissingRule(BotId),

    /// Bots hold at most two chips.
    #[error("bot {0} was given a third chip")]
    TooManyChips(BotId),

    /// No bot ever compares the wanted pair of chips.
    #[error("no bot compares chips {0} and {1}")]
    NoComparison(Chip, Chip),

    /// An output bin needed for the product stays empty.
    #[error("output bin {0} received no chip")]
    EmptyOutput(u32),

    /// Product of the output chips doesn't fit a `u64`.
    #[error("product of output chips overflowed")]
    Overflow,
}

/*
Input is a list of instructions for bots passing microchips around:
- `value V goes to bot B` starts bot `B` with the chip of value `V`.
- `bot B gives low to bot L and high to output H` is the rule for bot `B`, applied once it holds two
  chips. Either recipient can be a bot or an output bin.
*/

type BotId = u32;
type Chip = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recipient {
    Bot(BotId),
    Output(u32),
}

impl Recipient {
    fn new(kind: &str, number: u32) -> Self {
        if kind == "bot" {
            Self::Bot(number)
        } else {
            Self::Output(number)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rule {
    low: Recipient,
    high: Recipient,
}

enum Instruction {
    Value { chip: Chip, bot: BotId },
    Give { bot: BotId, rule: Rule },
}

struct Factory {
    initial_chips: Vec<(BotId, Chip)>,
    rules: HashMap<BotId, Rule>,
}

impl ParseData for Factory {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        const VALUE_PATTERN: &str = r"^value (\d+) goes to bot (\d+)$";
        const GIVE_PATTERN: &str =
            r"^bot (\d+) gives low to (bot|output) (\d+) and high to (bot|output) (\d+)$";

        let value_re = Regex::new(VALUE_PATTERN).expect("pattern should be valid");
        let give_re = Regex::new(GIVE_PATTERN).expect("pattern should be valid");

        let instructions = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let line = line.trim();
            if let Some(captures) = value_re.captures(line) {
                Ok(Instruction::Value {
                    chip: parse_with_context(&captures[1])?,
                    bot: parse_with_context(&captures[2])?,
                })
            } else if let Some(captures) = give_re.captures(line) {
                Ok(Instruction::Give {
                    bot: parse_with_context(&captures[1])?,
                    rule: Rule {
                        low: Recipient::new(&captures[2], parse_with_context(&captures[3])?),
                        high: Recipient::new(&captures[4], parse_with_context(&captures[5])?),
                    },
                })
            } else {
                Err(Day10Error::UnknownInstruction(line.to_owned()).into())
            }
        });

        let mut factory = Self {
            initial_chips: Vec::new(),
            rules: HashMap::new(),
        };
        for instruction in instructions {
            match instruction? {
                Instruction::Value { chip, bot } => factory.initial_chips.push((bot, chip)),
                Instruction::Give { bot, rule } => match factory.rules.entry(bot) {
                    Entry::Occupied(_) => return Err(Day10Error::DuplicateRule(bot).into()),
                    Entry::Vacant(entry) => {
                        entry.insert(rule);
                    }
                },
            }
        }
        Ok(factory)
    }
}

/// What happened once every bot that could give chips away has done so.
#[derive(Debug, Default)]
struct Outcome {
    /// The bot that compared each pair of chips, keyed by (low, high).
    comparisons: HashMap<(Chip, Chip), BotId>,
    /// Chips in each output bin, in the order received.
    outputs: HashMap<u32, Vec<Chip>>,
}

impl Factory {
    fn run(&self) -> Result<Outcome, Day10Error> {
        let mut holdings: HashMap<BotId, Vec<Chip>> = HashMap::new();
        let mut ready = Vec::new();
        let mut outcome = Outcome::default();

        let mut give = |recipient: Recipient,
                        chip: Chip,
                        holdings: &mut HashMap<BotId, Vec<Chip>>,
                        ready: &mut Vec<BotId>|
         -> Result<(), Day10Error> {
            match recipient {
                Recipient::Bot(bot) => {
                    let held = holdings.entry(bot).or_default();
                    held.push(chip);
                    match held.len() {
                        1 => {}
                        2 => ready.push(bot),
                        _ => return Err(Day10Error::TooManyChips(bot)),
                    }
                }
                Recipient::Output(bin) => outcome.outputs.entry(bin).or_default().push(chip),
            }
            Ok(())
        };

        for &(bot, chip) in &self.initial_chips {
            give(Recipient::Bot(bot), chip, &mut holdings, &mut ready)?;
        }

        let mut comparisons = HashMap::new();
        while let Some(bot) = ready.pop() {
            let rule = self.rules.get(&bot).ok_or(Day10Error::MissingRule(bot))?;
            let chips = holdings.remove(&bot).unwrap_or_default();
            let (Some(&low), Some(&high)) = (chips.iter().min(), chips.iter().max()) else {
                continue;
            };

            debug!("bot {bot} compares {low} and {high}");
            comparisons.insert((low, high), bot);
            give(rule.low, low, &mut holdings, &mut ready)?;
            give(rule.high, high, &mut holdings, &mut ready)?;
        }

        outcome.comparisons = comparisons;
        Ok(outcome)
    }
}

/*
For part 1, find the number of the bot that compares the value-61 and value-17 chips.
*/

impl Outcome {
    fn bot_comparing(&self, first: Chip, second: Chip) -> Result<BotId, Day10Error> {
        let key = (first.min(second), first.max(second));
        self.comparisons
            .get(&key)
            .copied()
            .ok_or(Day10Error::NoComparison(key.0, key.1))
    }
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = Factory;
    type Output = BotId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.run()?.bot_comparing(61, 17)?)
    }
}

/*
For part 2, multiply together the values of one chip from each of output bins 0, 1, and 2.
*/

impl Outcome {
    fn output_product(&self, bins: &[u32]) -> Result<u64, Day10Error> {
        bins.iter().try_fold(1u64, |product, &bin| {
            let chip = self
                .outputs
                .get(&bin)
                .and_then(|chips| chips.first())
                .ok_or(Day10Error::EmptyOutput(bin))?;
            product
                .checked_mul(u64::from(*chip))
                .ok_or(Day10Error::Overflow)
        })
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = Factory;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.run()?.output_product(&[0, 1, 2])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"value 5 goes to bot 2
bot 2 gives low to bot 1 and high to bot 0
value 3 goes to bot 1
bot 1 gives low to output 1 and high to bot 0
bot 0 gives low to output 2 and high to output 0
value 2 goes to bot 2
";

    #[test]
    fn example_bot_compares_five_and_two() -> DynamicResult<()> {
        let outcome = Factory::parse(EXAMPLE_INPUT)?.run()?;
        assert_eq!(outcome.bot_comparing(5, 2)?, 2);
        assert_eq!(outcome.bot_comparing(2, 3)?, 1);
        assert_eq!(outcome.bot_comparing(3, 5)?, 0);
        Ok(())
    }

    #[test]
    fn example_fills_outputs() -> DynamicResult<()> {
        let outcome = Factory::parse(EXAMPLE_INPUT)?.run()?;
        assert_eq!(outcome.outputs[&0], [5]);
        assert_eq!(outcome.outputs[&1], [2]);
        assert_eq!(outcome.outputs[&2], [3]);
        Ok(())
    }

    #[test]
    fn part_one_without_target_comparison_fails() -> DynamicResult<()> {
        let parsed = Factory::parse(EXAMPLE_INPUT)?;
        assert!(<Day10 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Factory::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 30);
        Ok(())
    }

    #[test]
    fn bot_without_rule_fails() -> DynamicResult<()> {
        let parsed = Factory::parse("value 1 goes to bot 0\nvalue 2 goes to bot 0\n")?;
        assert!(matches!(parsed.run(), Err(Day10Error::MissingRule(0))));
        Ok(())
    }

    #[test]
    fn parse_rejects_bad_instructions() {
        assert!(Factory::parse("value 1 goes to output 0\n").is_err());
        assert!(
            Factory::parse(
                "bot 0 gives low to output 0 and high to output 1\n\
                 bot 0 gives low to output 2 and high to output 3\n"
            )
            .is_err()
        );
    }
}
