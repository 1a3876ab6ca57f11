use std::cmp::Reverse;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

#[solution_runner(
    name = "Day 4: Security Through Obscurity",
    parsed = Rooms,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2016<4> {}

#[derive(thiserror::Error, Debug)]
enum Day04Error {
    /// Line not formatted as a room. Tuple contains the source string to report in the error
    /// message.
    #[error("expected room pattern \"name-sector[checksum]\", found {0:?}")]
    NotRoom(String),

    /// No real room decrypts to the wanted name.
    #[error("no real room is named {0:?}")]
    RoomNotFound(&'static str),
}

/*
Input lists encrypted rooms: lowercase words separated by dashes, a sector ID, and a checksum in
square brackets.
*/

type SectorId = u32;

#[derive(Debug)]
struct Room {
    encrypted_name: String,
    sector_id: SectorId,
    checksum: String,
}

struct Rooms(Vec<Room>);

impl ParseData for Rooms {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        const ROOM_PATTERN: &str = r"^([a-z]+(?:-[a-z]+)*)-(\d+)\[([a-z]{5})\]$";

        let room_re = Regex::new(ROOM_PATTERN).expect("pattern should be valid");
        let rooms = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let captures = room_re
                .captures(line.trim())
                .ok_or_else(|| Day04Error::NotRoom(line.to_owned()))?;
            let encrypted_name = captures[1].to_owned();
            let sector_id = parse_with_context(&captures[2])?;
            let checksum = captures[3].to_owned();
            Ok(Room {
                encrypted_name,
                sector_id,
                checksum,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rooms))
    }
}

/*
For part 1, a room is real when its checksum is the five most common letters of the encrypted name,
in order, with ties broken alphabetically. Sum the sector IDs of the real rooms.
*/

const ALPHABET_LEN: u8 = 26;

impl Room {
    fn expected_checksum(&self) -> String {
        let mut counts = [0usize; ALPHABET_LEN as usize];
        for letter in self.encrypted_name.bytes().filter(u8::is_ascii_lowercase) {
            counts[usize::from(letter - b'a')] += 1;
        }

        let mut letters: Vec<u8> = (0..ALPHABET_LEN).collect();
        // stable sort keeps alphabetical order among equal counts
        letters.sort_by_key(|&offset| Reverse(counts[usize::from(offset)]));
        letters
            .into_iter()
            .take(5)
            .map(|offset| char::from(b'a' + offset))
            .collect()
    }

    fn is_real(&self) -> bool {
        self.expected_checksum() == self.checksum
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = Rooms;
    type Output = SectorId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .0
            .iter()
            .filter(|room| room.is_real())
            .map(|room| room.sector_id)
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

/*
For part 2, decrypt real room names by rotating each letter forward through the alphabet as many
times as the sector ID; dashes become spaces. Find the sector ID of the room where North Pole
objects are stored.
*/

impl Room {
    fn decrypted_name(&self) -> String {
        let shift = u8::try_from(self.sector_id % SectorId::from(ALPHABET_LEN))
            .expect("remainder should be below alphabet length");
        self.encrypted_name
            .bytes()
            .map(|byte| match byte {
                b'-' => ' ',
                letter => char::from(b'a' + (letter - b'a' + shift) % ALPHABET_LEN),
            })
            .collect()
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = Rooms;
    type Output = SectorId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        const TARGET_NAME: &str = "northpole object storage";

        input
            .0
            .iter()
            .filter(|room| room.is_real())
            .find(|room| room.decrypted_name() == TARGET_NAME)
            .map(|room| room.sector_id)
            .ok_or_else(|| Day04Error::RoomNotFound(TARGET_NAME).into())
    }
}
