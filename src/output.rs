//! CLI output formatting for `--verbose` runs.
//!
//! Output is an inventory, not a file listing: every day and event leads with
//! its position and name, with counts and paths as secondary detail.
//!
//! ## Scan
//!
//! ```text
//! Archive: photos/ (2 days, 2 pictures)
//! 001 2024-01-01 (1 event)
//!     001 morning (2 pictures)
//!         Preview: a.jpg
//! 002 2024-01-02 (no events)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Arkisto → index.html
//! Päivä 2024-01-01 → 2024-01-01/index.html
//!     Tapahtuma morning → 2024-01-01/morning/index.html (2 images)
//!
//! Generated 3 pages in site/
//! ```
//!
//! Each stage has a `format_*` function returning lines (pure, testable) and a
//! `print_*` wrapper that writes them to stdout.

use crate::generate::GenerateReport;
use crate::types::Archive;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Directory shown with exactly one trailing `/`, however the user typed it.
fn dir_display(path: &Path) -> String {
    let shown = path.display().to_string();
    let trimmed = shown.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// `1 event`, `2 events`.
fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the scanned archive as an indented inventory.
pub fn format_scan_output(archive: &Archive, source_root: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Archive: {} ({}, {})",
        dir_display(source_root),
        plural(archive.days.len(), "day", "days"),
        plural(archive.picture_count(), "picture", "pictures"),
    )];

    for (i, day) in archive.days.iter().enumerate() {
        let detail = if day.events.is_empty() {
            "no events".to_string()
        } else {
            plural(day.events.len(), "event", "events")
        };
        lines.push(format!("{} {} ({})", format_index(i + 1), day.name, detail));

        for (j, event) in day.events.iter().enumerate() {
            lines.push(format!(
                "{}{} {} ({})",
                indent(1),
                format_index(j + 1),
                event.name,
                plural(event.pictures.len(), "picture", "pictures"),
            ));
            if let Some(preview) = event.preview() {
                lines.push(format!("{}Preview: {}", indent(2), preview));
            }
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(archive: &Archive, source_root: &Path) {
    for line in format_scan_output(archive, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the pages written by the generator, indented by depth.
pub fn format_generate_output(report: &GenerateReport, output_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for page in &report.pages {
        // index.html → 0, day/index.html → 0, day/event/index.html → 1
        let depth = page.path.matches('/').count().saturating_sub(1);
        let images = if page.images > 0 && depth > 0 {
            format!(" ({})", plural(page.images, "image", "images"))
        } else {
            String::new()
        };
        lines.push(format!(
            "{}{} \u{2192} {}{}",
            indent(depth),
            page.title,
            page.path,
            images
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} in {}",
        plural(report.pages.len(), "page", "pages"),
        dir_display(output_root)
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport, output_root: &Path) {
    for line in format_generate_output(report, output_root) {
        println!("{}", line);
    }
}
