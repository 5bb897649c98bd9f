//! Flat-file progress cursor.
//!
//! The whole persistent state of the bot is one integer: the index of the
//! next word that has not been quizzed yet.

use std::fs;
use std::io;
use std::path::PathBuf;

pub struct ProgressFile {
    path: PathBuf,
}

impl ProgressFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the saved cursor.
    ///
    /// A missing file is a first run and reads as 0. Unreadable or
    /// unparseable contents also read as 0, which restarts the quiz from
    /// the first word, so that case is logged loudly instead of silently.
    pub fn read(&self) -> usize {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return 0,
            Err(e) => {
                log::warn!(
                    "Could not read progress file {}: {}; starting over from the first word",
                    self.path.display(),
                    e
                );
                return 0;
            }
        };
        match contents.trim().parse() {
            Ok(cursor) => cursor,
            Err(_) => {
                log::warn!(
                    "Progress file {} holds {:?} instead of a number; starting over from the first word",
                    self.path.display(),
                    contents.trim()
                );
                0
            }
        }
    }

    pub fn write(&self, cursor: usize) -> io::Result<()> {
        fs::write(&self.path, cursor.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_zero() {
        let dir = tempdir().unwrap();
        let progress = ProgressFile::new(dir.path().join("progress.txt"));
        assert_eq!(progress.read(), 0);
    }

    #[test]
    fn round_trips_the_cursor() {
        let dir = tempdir().unwrap();
        let progress = ProgressFile::new(dir.path().join("progress.txt"));
        progress.write(42).unwrap();
        assert_eq!(progress.read(), 42);
    }

    #[test]
    fn overwrites_the_previous_cursor() {
        let dir = tempdir().unwrap();
        let progress = ProgressFile::new(dir.path().join("progress.txt"));
        progress.write(3).unwrap();
        progress.write(6).unwrap();
        assert_eq!(progress.read(), 6);
    }

    #[test]
    fn garbage_contents_read_as_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.txt");
        fs::write(&path, "definitely not a number").unwrap();
        assert_eq!(ProgressFile::new(path).read(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.txt");
        fs::write(&path, " 7\n").unwrap();
        assert_eq!(ProgressFile::new(path).read(), 7);
    }
}
