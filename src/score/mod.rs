//! Best-time persistence.
//!
//! The store keeps a single plain-text integer: the fewest seconds a
//! solve has taken. A caller reads it once at startup and offers each
//! finished game's time; the file is overwritten only when the new time
//! is strictly smaller. Unreadable or unparseable content counts as "no
//! best time yet" rather than an error, the same as a missing file.
//!
//! This is deliberately the only I/O in the crate; the puzzle core never
//! touches a file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed best-time record.
#[derive(Clone, Debug)]
pub struct BestTimeStore {
    path: PathBuf,
}

impl BestTimeStore {
    /// Create a store backed by `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best time in seconds, if any.
    #[must_use]
    pub fn load(&self) -> Option<u64> {
        let text = fs::read_to_string(&self.path).ok()?;
        text.trim().parse().ok()
    }

    /// Offer `seconds` as a new best time.
    ///
    /// Writes only when no best exists or `seconds` is strictly smaller
    /// than the stored value. Returns whether the file was written.
    ///
    /// # Errors
    ///
    /// Propagates the write failure. The read side never errors; a bad
    /// file simply reads as no best time.
    pub fn record(&self, seconds: u64) -> io::Result<bool> {
        match self.load() {
            Some(best) if best <= seconds => Ok(false),
            _ => {
                fs::write(&self.path, seconds.to_string())?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("rust_hanoi_{}_{}", std::process::id(), name));
        path
    }

    struct Cleanup(PathBuf);

    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_missing_file_loads_none() {
        let path = scratch_path("missing");
        let store = BestTimeStore::new(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_garbage_file_loads_none() {
        let path = scratch_path("garbage");
        let _cleanup = Cleanup(path.clone());
        fs::write(&path, "not a number").unwrap();

        let store = BestTimeStore::new(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_first_record_writes() {
        let path = scratch_path("first");
        let _cleanup = Cleanup(path.clone());

        let store = BestTimeStore::new(&path);
        assert!(store.record(90).unwrap());
        assert_eq!(store.load(), Some(90));
        assert_eq!(fs::read_to_string(&path).unwrap(), "90");
    }

    #[test]
    fn test_only_strict_improvement_overwrites() {
        let path = scratch_path("improve");
        let _cleanup = Cleanup(path.clone());

        let store = BestTimeStore::new(&path);
        store.record(60).unwrap();

        assert!(!store.record(75).unwrap()); // worse
        assert!(!store.record(60).unwrap()); // equal
        assert_eq!(store.load(), Some(60));

        assert!(store.record(45).unwrap()); // strictly better
        assert_eq!(store.load(), Some(45));
    }

    #[test]
    fn test_record_over_garbage_writes() {
        let path = scratch_path("over_garbage");
        let _cleanup = Cleanup(path.clone());
        fs::write(&path, "??\n").unwrap();

        let store = BestTimeStore::new(&path);
        assert!(store.record(120).unwrap());
        assert_eq!(store.load(), Some(120));
    }

    #[test]
    fn test_load_tolerates_whitespace() {
        let path = scratch_path("whitespace");
        let _cleanup = Cleanup(path.clone());
        fs::write(&path, " 42 \n").unwrap();

        let store = BestTimeStore::new(&path);
        assert_eq!(store.load(), Some(42));
    }
}
