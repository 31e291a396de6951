//! Testing utilities for tagdir
//!
//! This module provides `TestFolder`, a temporary folder fixture that is
//! removed on drop, plus builders for the fixture layouts the listing and
//! bulk-rename tests share.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Files of the `simple_cases` fixture: twenty files mixing foo, bar, baz,
/// fizz and buzz
pub const SIMPLE_CASES: [&str; 20] = [
    "file0[foo].txt",
    "file1[bar].txt",
    "file2[baz].txt",
    "file3[foo].txt",
    "file4[foo bar].txt",
    "file5[foo bar baz fizz buzz].txt",
    "file6[fizz buzz].txt",
    "file7[bar fizz].txt",
    "file8[baz buzz foo].txt",
    "file9[baz fizz].txt",
    "file10[bar].txt",
    "file11[bar].txt",
    "file12[foo fizz].txt",
    "file13[foo buzz].txt",
    "file14[bar foo].txt",
    "file15[foo fizz buzz].txt",
    "file16[foo bar baz].txt",
    "file17[baz foo bar].txt",
    "file18[fizz buzz].txt",
    "file19[fizz].txt",
];

/// Files of the `find_replace` fixture
pub const FIND_REPLACE: [&str; 6] = [
    "file0[foo].txt",
    "file1[foo bar].txt",
    "file2[bar foo].txt",
    "file3[bar].txt",
    "file4[baz].txt",
    "untagged.txt",
];

/// Temporary folder that cleans up after itself
///
/// # Examples
/// ```ignore
/// let test = TestFolder::new();
/// test.file("photo[beach].jpg");
/// test.folder("albums[2019]");
/// assert_eq!(test.names(), ["albums[2019]", "photo[beach].jpg"]);
/// ```
pub struct TestFolder {
    dir: TempDir,
}

impl TestFolder {
    /// Create an empty temporary folder
    ///
    /// # Panics
    /// Panics if the folder cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("tagdir_test_")
            .tempdir()
            .expect("Failed to create test folder");
        Self { dir }
    }

    /// Folder pre-populated with [`SIMPLE_CASES`]
    #[must_use]
    pub fn simple_cases() -> Self {
        let test = Self::new();
        for name in SIMPLE_CASES {
            test.file(name);
        }
        test
    }

    /// Folder pre-populated with [`FIND_REPLACE`]
    #[must_use]
    pub fn find_replace() -> Self {
        let test = Self::new();
        for name in FIND_REPLACE {
            test.file(name);
        }
        test
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with default content and return its path
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn file(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        let mut file = fs::File::create(&path).expect("Failed to create test file");
        file.write_all(b"test content").expect("Failed to write test file");
        path
    }

    /// Create a sub-folder and return its path
    ///
    /// # Panics
    /// Panics if the folder cannot be created.
    pub fn folder(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create test sub-folder");
        path
    }

    /// Names of everything directly inside the folder, sorted
    ///
    /// # Panics
    /// Panics if the folder cannot be read.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .expect("Failed to read test folder")
            .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_cleanup() {
        let path = {
            let test = TestFolder::new();
            test.file("a.txt");
            assert!(test.path().exists());
            test.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_file_and_folder() {
        let test = TestFolder::new();
        let file = test.file("b[x].txt");
        let folder = test.folder("a[y]");
        assert_eq!(fs::read_to_string(file).unwrap(), "test content");
        assert!(folder.is_dir());
        assert_eq!(test.names(), ["a[y]", "b[x].txt"]);
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(TestFolder::simple_cases().names().len(), SIMPLE_CASES.len());
        assert_eq!(TestFolder::find_replace().names().len(), FIND_REPLACE.len());
    }
}
