//! Puzzle input files on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Read-only store of puzzle inputs
///
/// Directory structure: `{root}/{year}/day-{day:02}`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(format!("day-{:02}", day))
    }

    /// Read the whole input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { path },
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.input_path(2021, 1), PathBuf::from("inputs/2021/day-01"));
        assert_eq!(store.input_path(2021, 25), PathBuf::from("inputs/2021/day-25"));
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(matches!(store.read(2021, 3), Err(InputError::Missing { .. })));
        fs::create_dir_all(temp.path().join("2021")).unwrap();
        fs::write(store.input_path(2021, 3), "00100\n11110\n").unwrap();

        assert_eq!(store.read(2021, 3).unwrap(), "00100\n11110\n");
    }

    #[test]
    fn test_missing_input_names_path() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let err = store.read(2021, 9).unwrap_err();
        assert!(matches!(&err, InputError::Missing { path } if path.ends_with("2021/day-09")));
        assert!(err.to_string().contains("day-09"));
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(store.input_path(2021, 4)).unwrap();

        assert!(matches!(store.read(2021, 4), Err(InputError::Io { .. })));
    }
}
