//! Shared test utilities.
//!
//! Builds throwaway archive trees on disk and provides lookups that panic
//! with a readable message on a miss.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_archive(&[
//!     ("2024-01-01/morning", &["a.jpg", "b.jpg"]),
//!     ("2024-01-01/empty", &[]),
//! ]);
//! let archive = scan(tmp.path()).unwrap();
//! let day = find_day(&archive, "2024-01-01");
//! assert_eq!(event_names(day), vec!["morning"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::types::{Archive, Day, Event};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp archive. Each entry is `("<day>/<event>", pictures)`; the
/// event directory is created even when `pictures` is empty.
pub fn setup_archive(layout: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (dir, pictures) in layout {
        mkdir(tmp.path(), dir);
        for picture in *pictures {
            touch(tmp.path(), &format!("{dir}/{picture}"));
        }
    }
    tmp
}

/// Create a directory (and parents) under `root`.
pub fn mkdir(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(&path).unwrap();
    path
}

/// Write a small placeholder file under `root`, creating parents.
pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, format!("fake image {rel}")).unwrap();
    path
}

/// Build an in-memory event without touching the filesystem.
pub fn event(name: &str, pictures: &[&str]) -> Event {
    Event {
        name: name.to_string(),
        pictures: pictures.iter().map(|p| p.to_string()).collect(),
    }
}

/// Build an in-memory day without touching the filesystem.
pub fn day(name: &str, events: Vec<Event>) -> Day {
    Day {
        name: name.to_string(),
        events,
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a day by name. Panics if not found.
pub fn find_day<'a>(archive: &'a Archive, name: &str) -> &'a Day {
    archive
        .days
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("day '{name}' not found. Available: {:?}", day_names(archive)))
}

/// Find an event by name within a day. Panics if not found.
pub fn find_event<'a>(day: &'a Day, name: &str) -> &'a Event {
    day.events.iter().find(|e| e.name == name).unwrap_or_else(|| {
        panic!(
            "event '{name}' not found in day '{}'. Available: {:?}",
            day.name,
            event_names(day)
        )
    })
}

/// Day names in archive order.
pub fn day_names(archive: &Archive) -> Vec<&str> {
    archive.days.iter().map(|d| d.name.as_str()).collect()
}

/// Event names in day order.
pub fn event_names(day: &Day) -> Vec<&str> {
    day.events.iter().map(|e| e.name.as_str()).collect()
}

/// Read a generated page. Panics with the path if it is missing.
pub fn read_page(output: &Path, rel: &str) -> String {
    let path = output.join(rel);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Every `src="..."` value on a page, in document order.
pub fn img_sources(html: &str) -> Vec<String> {
    html.split("<img src=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
