//! Locating and reading puzzle input files.
//!
//! Inputs live in one directory, one file per day, named by the zero-padded day number
//! (`01.txt`, `02.txt`, ..., `25.txt`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error};
use thiserror::Error;

/// Default directory holding puzzle inputs, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "textfiles";

/// An input file could not be read.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read input file at: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the given input file to a string.
///
/// # Errors
///
/// Returns [`InputError::Unreadable`] if the file can't be read.
pub fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_owned(),
        source,
    })
}

/// A directory of puzzle inputs named by day.
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl Default for InputStore {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR)
    }
}

impl InputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The path of a day's input file, e.g. `textfiles/03.txt` for day 3.
    pub fn path_for(&self, day: u8) -> PathBuf {
        self.dir.join(format!("{day:02}.txt"))
    }

    /// Read a day's input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Unreadable`] if the day's file can't be read.
    pub fn try_read(&self, day: u8) -> Result<String, InputError> {
        let path = self.path_for(day);
        debug!("reading input for day {day} from {}", path.display());
        read_file(&path)
    }

    /// Read a day's input, logging any failure and falling back to empty input.
    pub fn read(&self, day: u8) -> String {
        match self.try_read(day) {
            Ok(input) => input,
            Err(InputError::Unreadable { path, source }) => {
                error!("the input file cannot be opened: {} ({source})", path.display());
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn path_pads_single_digit_days() {
        let store = InputStore::new("inputs");
        assert_eq!(store.path_for(3), PathBuf::from("inputs").join("03.txt"));
        assert_eq!(store.path_for(12), PathBuf::from("inputs").join("12.txt"));
    }

    #[test]
    fn default_store_uses_textfiles() {
        let store = InputStore::default();
        assert_eq!(store.path_for(1), PathBuf::from("textfiles").join("01.txt"));
    }

    #[test]
    fn reads_existing_day() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("07.txt"), "abba[mnop]qrst\n")?;

        let store = InputStore::new(dir.path());
        assert_eq!(store.try_read(7)?, "abba[mnop]qrst\n");
        assert_eq!(store.read(7), "abba[mnop]qrst\n");
        Ok(())
    }

    #[test]
    fn missing_day_is_empty_when_read_leniently() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let store = InputStore::new(dir.path());

        assert_eq!(store.read(4), "");
        let Err(err) = store.try_read(4) else {
            panic!("day 4 has no input file");
        };
        assert!(err.to_string().ends_with("04.txt"));
        Ok(())
    }
}
