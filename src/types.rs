//! The in-memory archive model shared by the scanner and the generator.
//!
//! Built once by [`crate::scan::scan`], consumed once by
//! [`crate::generate::generate`], never mutated in between. Names are the raw
//! filesystem entry names: no slugging, no renaming.

use serde::{Deserialize, Serialize};

/// Every day directory found under the input root, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    pub days: Vec<Day>,
}

impl Archive {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of pictures across all days and events.
    pub fn picture_count(&self) -> usize {
        self.days.iter().map(Day::picture_count).sum()
    }
}

/// One capture day. May hold zero events when every event directory under it
/// was empty; such a day is still listed on the root page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub name: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Day {
    pub fn picture_count(&self) -> usize {
        self.events.iter().map(|e| e.pictures.len()).sum()
    }
}

/// One event within a day.
///
/// A scanned event always has at least one picture; directories without
/// files never become an `Event`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// Picture filenames, sorted.
    pub pictures: Vec<String>,
}

impl Event {
    /// The picture shown as the event's preview on the day page.
    pub fn preview(&self) -> Option<&str> {
        self.pictures.first().map(String::as_str)
    }
}
