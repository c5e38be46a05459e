//! Filesystem probes
//!
//! [`Validator::is_file`](crate::Validator::is_file) and
//! [`Validator::is_dir`](crate::Validator::is_dir) ask whether a path exists.
//! The question goes through the [`Filesystem`] trait so the host can be
//! swapped for an in-memory fake in tests
//! ([`MemoryFs`](crate::testing::MemoryFs)).
//!
//! Every probe is a one-off snapshot: no caching, no retries.

use std::path::Path;

/// Read-only existence queries.
pub trait Filesystem {
    /// `true` if `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// `true` if `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}

/// The host filesystem.
///
/// Symlinks are followed. Any error while reading metadata (missing path,
/// permission denied, broken link) counts as "does not exist".
///
/// ```rust
/// use fieldcheck::fs::{Filesystem, HostFs};
/// use std::path::Path;
///
/// assert!(HostFs.is_dir(Path::new(".")));
/// assert!(!HostFs.is_file(Path::new("./definitely/not/here")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostFs;

impl Filesystem for HostFs {
    fn is_file(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_fs_file_and_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("avatar.png");
        std::fs::write(&file, b"png").unwrap();

        assert!(HostFs.is_file(&file));
        assert!(!HostFs.is_dir(&file));
        assert!(HostFs.is_dir(dir.path()));
        assert!(!HostFs.is_file(dir.path()));
    }

    #[test]
    fn test_host_fs_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        assert!(!HostFs.is_file(&missing));
        assert!(!HostFs.is_dir(&missing));
    }

    #[test]
    fn test_reference_forwards() {
        let dir = tempfile::tempdir().unwrap();
        let fs = &HostFs;
        assert!(Filesystem::is_dir(&fs, dir.path()));
    }
}
