use aoc_framework::parsing::single_line;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use md5::{Digest, Md5};

#[solution_runner(
    name = "Day 5: How About a Nice Game of Chess?",
    parsed = DoorId,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2016<5> {}

/*
Input is a single line: the door ID.

Hashing the door ID followed by an increasing integer index (starting at 0) with MD5 gives hashes;
the hashes whose hexadecimal form starts with five zeroes are interesting.
*/

struct DoorId(String);

impl ParseData for DoorId {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(single_line(input)?.to_owned()))
    }
}

const PASSWORD_LEN: usize = 8;

/// The sixth and seventh hex digits of an interesting hash, as nibble values.
#[derive(Debug, PartialEq, Eq)]
struct InterestingHash {
    sixth: u8,
    seventh: u8,
}

fn interesting_hash(door_id: &str, index: u64) -> Option<InterestingHash> {
    let digest = Md5::digest(format!("{door_id}{index}"));
    // five leading zero hex digits: two zero bytes then a zero high nibble
    (digest[0] == 0 && digest[1] == 0 && digest[2] >> 4 == 0).then(|| InterestingHash {
        sixth: digest[2] & 0x0f,
        seventh: digest[3] >> 4,
    })
}

fn interesting_hashes(door_id: &str) -> impl Iterator<Item = InterestingHash> {
    (0..).filter_map(move |index| interesting_hash(door_id, index))
}

fn hex_char(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16).expect("nibble should be a hex digit")
}

/*
For part 1, the password is the sixth hex digit of the first eight interesting hashes, in order.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = DoorId;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let password = interesting_hashes(&input.0)
            .take(PASSWORD_LEN)
            .map(|hash| hex_char(hash.sixth))
            .collect();
        Ok(password)
    }
}

/*
For part 2, the sixth hex digit of an interesting hash is a password position and the seventh is the
character for it. Positions outside the password, or already filled, are ignored.
*/

/// Fill password positions from hashes, stopping once every position is set.
///
/// Returns the characters filled so far if the hashes run out first.
fn positional_password(hashes: impl IntoIterator<Item = InterestingHash>) -> String {
    let mut password = [None; PASSWORD_LEN];
    let mut filled = 0;

    for hash in hashes {
        if let Some(slot) = password.get_mut(usize::from(hash.sixth))
            && slot.is_none()
        {
            *slot = Some(hex_char(hash.seventh));
            filled += 1;
            if filled == PASSWORD_LEN {
                break;
            }
        }
    }

    password.into_iter().flatten().collect()
}

impl Solution<PartTwo> for Day05 {
    type Input = DoorId;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(positional_password(interesting_hashes(&input.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_interesting_hashes() {
        assert_eq!(interesting_hash("abc", 3_231_928), None);
        assert_eq!(
            interesting_hash("abc", 3_231_929),
            Some(InterestingHash {
                sixth: 1,
                seventh: 5
            })
        );
        assert_eq!(interesting_hash("abc", 5_017_308).map(|hash| hash.sixth), Some(8));
        assert_eq!(interesting_hash("abc", 5_357_525).map(|hash| hash.sixth), Some(4));
    }

    #[test]
    fn hex_chars_are_lowercase() {
        assert_eq!(hex_char(0), '0');
        assert_eq!(hex_char(15), 'f');
    }

    fn hash(sixth: u8, seventh: u8) -> InterestingHash {
        InterestingHash { sixth, seventh }
    }

    #[test]
    fn positional_password_ignores_outside_and_filled_positions() {
        let hashes = [
            hash(1, 5),
            // outside the password
            hash(8, 0xf),
            hash(15, 0xe),
            hash(4, 0xe),
            // position 1 is already taken
            hash(1, 0),
            hash(0, 0),
            hash(2, 0xa),
            hash(3, 0xc),
            hash(5, 8),
            hash(6, 0xe),
            hash(7, 3),
        ];
        assert_eq!(positional_password(hashes), "05ace8e3");
    }

    #[test]
    fn positional_password_stops_when_full() {
        let mut consumed = 0;
        let hashes = (0..8)
            .map(|position| hash(position, position))
            .chain(std::iter::repeat_with(|| hash(0, 0xf)))
            .inspect(|_| consumed += 1);
        assert_eq!(positional_password(hashes), "01234567");
        assert_eq!(consumed, PASSWORD_LEN);
    }

    #[test]
    #[ignore = "brute force over millions of hashes"]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = DoorId::parse("abc\n")?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "18f47a30");
        Ok(())
    }

    #[test]
    #[ignore = "brute force over tens of millions of hashes"]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = DoorId::parse("abc\n")?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "05ace8e3");
        Ok(())
    }
}
