//! Testing utilities for code that validates forms
//!
//! Assertion macros that print the full error report on failure, an
//! in-memory [`Filesystem`] for the path checks, and (with the `proptest`
//! feature) strategies for generating field values.
//!
//! # Examples
//!
//! ## Assertion macros
//!
//! ```rust
//! use fieldcheck::{assert_errors, assert_invalid, assert_valid, Validator};
//!
//! assert_valid!(Validator::text("ok").not_empty());
//! assert_invalid!(Validator::text("").not_empty());
//! assert_errors!(Validator::text("").not_empty(), ["cannot be empty"]);
//! ```
//!
//! ## MemoryFs
//!
//! ```rust
//! use fieldcheck::testing::MemoryFs;
//! use fieldcheck::Validator;
//!
//! let fs = MemoryFs::new().with_file("static/logo.svg");
//!
//! let v = Validator::list(["logo", "icon"]).is_file_in(&fs, "static/", ".svg");
//! assert_eq!(v.errors(), "not a file: icon.svg");
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::fs::Filesystem;

/// A fake filesystem holding a fixed set of files and directories.
///
/// Paths are compared exactly as given; nothing is normalised. Registering a
/// file or directory also registers its ancestors as directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl MemoryFs {
    /// An empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_ancestors(path);
        self.files.insert(path.to_path_buf());
        self
    }

    /// Add a directory.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_ancestors(path);
        self.dirs.insert(path.to_path_buf());
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }
}

impl Filesystem for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}

/// Assert that a validator recorded no errors.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_valid, Validator};
///
/// assert_valid!(Validator::text(" x ").trim().not_empty());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr) => {
        match $validator {
            v => {
                if !v.is_valid() {
                    panic!("Expected no errors, got: {}", v.errors());
                }
            }
        }
    };
}

/// Assert that a validator recorded at least one error.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_invalid, Validator};
///
/// assert_invalid!(Validator::list(Vec::<String>::new()).not_empty());
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr) => {
        match $validator {
            v => {
                if v.is_valid() {
                    panic!("Expected errors, got none for value: {:?}", v.value());
                }
            }
        }
    };
}

/// Assert that a validator recorded exactly these errors, in order.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_errors, Validator};
///
/// let v = Validator::list(["a", "b"]).min_length(2).unwrap();
/// assert_errors!(v, ["each entry min length: 2", "each entry min length: 2"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validator:expr, [$($expected:expr),* $(,)?]) => {
        match $validator {
            v => {
                let expected: ::std::vec::Vec<&str> = ::std::vec![$($expected),*];
                let actual: ::std::vec::Vec<&str> =
                    v.error_list().iter().map(|s| s.as_str()).collect();
                assert_eq!(actual, expected, "Unexpected errors for value: {:?}", v.value());
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::value::Value;

/// Strategy for form-like strings: printable ASCII mixed with whitespace
/// runs and slashes.
#[cfg(feature = "proptest")]
pub fn field_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ a-zA-Z0-9/\t\n<>&\"']{0,24}")
        .expect("valid regex")
}

/// Strategy for a [`Value`] of either kind.
#[cfg(feature = "proptest")]
pub fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        field_text().prop_map(Value::Text),
        prop::collection::vec(field_text(), 0..8).prop_map(Value::TextList),
    ]
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        field_value().boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;

    #[test]
    fn memory_fs_files_and_dirs() {
        let fs = MemoryFs::new().with_file("a/b/c.txt").with_dir("d");

        assert!(fs.is_file(Path::new("a/b/c.txt")));
        assert!(fs.is_dir(Path::new("a/b")));
        assert!(fs.is_dir(Path::new("a")));
        assert!(fs.is_dir(Path::new("d")));
        assert!(!fs.is_file(Path::new("a/b")));
        assert!(!fs.is_dir(Path::new("a/b/c.txt")));
        assert!(!fs.is_dir(Path::new("")));
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Validator::text("x").not_empty());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(Validator::text("").not_empty());
    }

    #[test]
    fn assert_errors_macro() {
        assert_errors!(Validator::text("").not_empty(), ["cannot be empty"]);
        assert_errors!(Validator::text("x").not_empty(), []);
    }

    #[test]
    #[should_panic(expected = "Expected no errors, got: cannot be empty")]
    fn assert_valid_panics_on_errors() {
        assert_valid!(Validator::text("").not_empty());
    }

    #[test]
    #[should_panic(expected = "Expected errors, got none")]
    fn assert_invalid_panics_when_valid() {
        assert_invalid!(Validator::text("x").not_empty());
    }

    #[test]
    #[should_panic(expected = "Unexpected errors")]
    fn assert_errors_panics_on_mismatch() {
        assert_errors!(Validator::text("").not_empty(), ["min length: 1"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::value::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn value_arbitrary_covers_both_kinds(value in any::<Value>()) {
                let kind = value.kind();
                prop_assert_eq!(Validator::from_value(value).kind(), kind);
            }
        }
    }
}
