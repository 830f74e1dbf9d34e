//! # motionsite
//!
//! Turns a directory tree of photographs, organized by capture day and event,
//! into a static browsable HTML archive that mirrors the tree. The pictures
//! themselves stay where they are; pages link back to them.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      archive/  →  Archive     (filesystem → in-memory tree)
//! 2. Generate  Archive   →  site/       (one index.html per node)
//! ```
//!
//! The tree is built once, rendered once, then dropped. There is no cache and
//! no incremental mode: every run rewrites every page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks `archive/<day>/<event>/<picture>` into an [`types::Archive`] |
//! | [`generate`] | Stage 2 — renders and writes the root, day and event pages using Maud |
//! | [`paths`] | Relative links from a page's directory to a source picture |
//! | [`types`] | The Archive / Day / Event model |
//! | [`output`] | CLI inventory of scan and generate results |
//!
//! # Input Layout
//!
//! ```text
//! archive/
//! ├── 2024-01-01/           # Day: any directory
//! │   ├── morning/          # Event: any directory holding at least one file
//! │   │   ├── a.jpg         # Picture: any regular file
//! │   │   └── b.jpg
//! │   └── empty/            # No files → not an event
//! └── 2024-01-02/           # Day without events: still listed
//! ```
//!
//! Everything sorts by plain byte-wise name comparison, so ISO dates
//! (`YYYY-MM-DD`) list chronologically.
//!
//! # Design Decisions
//!
//! ## Link, Never Copy
//!
//! The generated site contains only HTML. Each `<img>` is a relative path from
//! the page's directory back into the input tree, computed per page because
//! the output and input roots can sit at unrelated depths.
//!
//! ## Escaped Names
//!
//! Day and event names come straight from the filesystem and are rendered
//! through Maud, which escapes them. A directory called `a&b` shows up as
//! `a&b`, not as broken markup.
//!
//! ## Deterministic Output
//!
//! No timestamps, no generated IDs, sorted traversal. Two runs over the same
//! input produce byte-identical pages.

pub mod generate;
pub mod output;
pub mod paths;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
