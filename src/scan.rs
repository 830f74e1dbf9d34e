//! Filesystem scanning.
//!
//! Stage 1 of the pipeline. Walks a fixed three-level layout and builds the
//! [`Archive`] model that the generator renders.
//!
//! ## Directory Structure
//!
//! ```text
//! archive/                         # Input root
//! ├── 2024-01-01/                  # Day (directory)
//! │   ├── morning/                 # Event (directory with files)
//! │   │   ├── a.jpg                # Picture (any regular file)
//! │   │   └── b.jpg
//! │   ├── empty/                   # No files: dropped
//! │   └── notes.txt                # File at event level: ignored
//! ├── 2024-01-02/                  # Day with no events: still listed
//! └── README                       # File at day level: ignored
//! ```
//!
//! ## Rules
//!
//! - Day and event levels keep directories only; the picture level keeps
//!   regular files only. Anything else at a level is skipped.
//! - Every level is sorted by plain byte-wise name comparison.
//! - An event directory without a single file never becomes an [`Event`].
//!
//! Any directory that cannot be listed aborts the whole scan.

use crate::types::{Archive, Day, Event};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot read {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("entry name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),
}

impl ScanError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            io::ErrorKind::NotADirectory => ScanError::NotADirectory(path.to_path_buf()),
            _ => ScanError::ReadDir {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Which kind of entry a level keeps.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EntryKind {
    Dir,
    File,
}

impl EntryKind {
    fn matches(self, path: &Path) -> bool {
        match self {
            EntryKind::Dir => path.is_dir(),
            EntryKind::File => path.is_file(),
        }
    }
}

/// Scan `root` into an [`Archive`].
///
/// `root` must be a readable directory holding one subdirectory per day.
pub fn scan(root: &Path) -> Result<Archive, ScanError> {
    debug!(root = %root.display(), "scanning archive");

    let mut days = Vec::new();
    for day_name in list_names(root, EntryKind::Dir)? {
        let day = scan_day(root, day_name)?;
        days.push(day);
    }

    Ok(Archive { days })
}

fn scan_day(root: &Path, name: String) -> Result<Day, ScanError> {
    let day_path = root.join(&name);
    let mut events = Vec::new();

    for event_name in list_names(&day_path, EntryKind::Dir)? {
        let pictures = list_names(&day_path.join(&event_name), EntryKind::File)?;
        if pictures.is_empty() {
            debug!(day = %name, event = %event_name, "skipping event without pictures");
            continue;
        }
        events.push(Event {
            name: event_name,
            pictures,
        });
    }

    trace!(day = %name, events = events.len(), "scanned day");
    Ok(Day { name, events })
}

/// List the names of the entries of `dir` that match `kind`, sorted.
fn list_names(dir: &Path, kind: EntryKind) -> Result<Vec<String>, ScanError> {
    let read = fs::read_dir(dir).map_err(|e| ScanError::from_io(dir, e))?;

    let mut names = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| ScanError::from_io(dir, e))?;
        let path = entry.path();
        if !kind.matches(&path) {
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| ScanError::NonUtf8Name(path.clone()))?;
        names.push(name);
    }

    names.sort();
    Ok(names)
}
