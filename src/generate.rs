//! HTML site generation.
//!
//! Stage 2 of the pipeline. Takes the scanned [`Archive`] and writes one
//! `index.html` per node, mirroring the input tree.
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── index.html                 # Root: list of days
//! └── 2024-01-01/
//!     ├── index.html             # Day: one preview card per event
//!     └── morning/
//!         └── index.html         # Event: every picture, full size
//! ```
//!
//! Pictures are never copied. Every `<img>` points back into the input tree
//! through a path computed from the page's own directory (see
//! [`crate::paths`]).
//!
//! ## HTML Generation
//!
//! Pages are rendered by pure functions with [maud](https://maud.lambda.xyz/).
//! Day and event names are interpolated through maud, so `<`, `&` and quotes
//! in directory names are escaped instead of breaking the markup. Names used
//! in `href`/`src` are percent-encoded first (see [`crate::paths`]).
//!
//! Output is deterministic: the same archive always renders to the same bytes.

use crate::paths;
use crate::types::{Archive, Day, Event};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot resolve link to {}: {source}", path.display())]
    Link {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub const INDEX_FILE: &str = "index.html";

const ROOT_TITLE: &str = "Arkisto";
const DAY_PREFIX: &str = "Päivä";
const EVENT_PREFIX: &str = "Tapahtuma";
const PICTURES_SUFFIX: &str = "kuvaa";
const BACK_LABEL: &str = "takaisin";
const PREVIEW_WIDTH_PX: u32 = 320;

/// One page written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    /// Path relative to the output root, `/`-separated.
    pub path: String,
    pub title: String,
    /// Number of `<img>` elements on the page.
    pub images: usize,
}

/// Everything [`generate`] wrote, in write order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
}

/// Data for one event block on a day page.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard<'a> {
    pub event: &'a Event,
    /// Link from the day page directory to the event's first picture.
    pub preview_url: Option<String>,
}

/// Write the whole site for `archive` under `output`, linking pictures back
/// into `source`.
///
/// Pages are written root first, then each day followed by its events. A
/// failure stops the run where it happened; pages already written stay.
pub fn generate(
    output: &Path,
    source: &Path,
    archive: &Archive,
) -> Result<GenerateReport, GenerateError> {
    let mut report = GenerateReport::default();

    write_page(output, &render_root_index(archive))?;
    report.pages.push(GeneratedPage {
        path: INDEX_FILE.to_string(),
        title: ROOT_TITLE.to_string(),
        images: 0,
    });

    for day in &archive.days {
        let day_out = output.join(&day.name);
        let day_src = source.join(&day.name);

        let mut cards = Vec::with_capacity(day.events.len());
        for event in &day.events {
            let preview_url = match event.preview() {
                Some(p) => Some(link(&day_out, &day_src.join(&event.name).join(p))?),
                None => None,
            };
            cards.push(EventCard { event, preview_url });
        }

        write_page(&day_out, &render_day_index(day, &cards))?;
        report.pages.push(GeneratedPage {
            path: format!("{}/{INDEX_FILE}", day.name),
            title: day_title(day),
            images: cards.iter().filter(|c| c.preview_url.is_some()).count(),
        });

        for event in &day.events {
            let event_out = day_out.join(&event.name);
            let event_src = day_src.join(&event.name);

            let urls = event
                .pictures
                .iter()
                .map(|p| link(&event_out, &event_src.join(p)))
                .collect::<Result<Vec<_>, _>>()?;

            write_page(&event_out, &render_event_index(event, &urls))?;
            report.pages.push(GeneratedPage {
                path: format!("{}/{}/{INDEX_FILE}", day.name, event.name),
                title: event_title(event),
                images: urls.len(),
            });
        }
    }

    Ok(report)
}

fn link(page_dir: &Path, picture: &Path) -> Result<String, GenerateError> {
    paths::relative_url(page_dir, picture).map_err(|source| GenerateError::Link {
        path: picture.to_path_buf(),
        source,
    })
}

/// Create `dir` if needed and (over)write its `index.html`.
fn write_page(dir: &Path, page: &Markup) -> Result<(), GenerateError> {
    fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(INDEX_FILE);
    fs::write(&path, &page.0).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "wrote page");
    Ok(())
}

// ============================================================================
// Labels
// ============================================================================

pub fn day_title(day: &Day) -> String {
    format!("{DAY_PREFIX} {}", day.name)
}

pub fn event_title(event: &Event) -> String {
    format!("{EVENT_PREFIX} {}", event.name)
}

/// Heading of an event card, e.g. `Tapahtuma morning (2 kuvaa)`.
pub fn event_label(event: &Event) -> String {
    format!(
        "{EVENT_PREFIX} {} ({} {PICTURES_SUFFIX})",
        event.name,
        event.pictures.len()
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the document shell shared by every page.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                (content)
            }
        }
    }
}

fn back_link() -> Markup {
    html! {
        div {
            a href=".." { (BACK_LABEL) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the root page listing every day.
pub fn render_root_index(archive: &Archive) -> Markup {
    let content = html! {
        ul {
            @for day in &archive.days {
                li { a href=(paths::encode_segment(&day.name)) { (day.name) } }
            }
        }
    };

    base_document(ROOT_TITLE, content)
}

/// Renders a day page with one preview card per event.
///
/// `cards` must be in event order; the caller resolves preview links since
/// they depend on where the page is written.
pub fn render_day_index(day: &Day, cards: &[EventCard<'_>]) -> Markup {
    let preview_style = format!("width: {PREVIEW_WIDTH_PX}px;");

    let content = html! {
        (back_link())
        div {
            @for card in cards {
                div {
                    h2 { (event_label(card.event)) }
                    a href=(paths::encode_segment(&card.event.name)) {
                        @if let Some(url) = &card.preview_url {
                            img src=(url) style=(preview_style);
                        }
                    }
                }
            }
        }
    };

    base_document(&day_title(day), content)
}

/// Renders an event page with every picture at full size.
pub fn render_event_index(event: &Event, picture_urls: &[String]) -> Markup {
    let content = html! {
        (back_link())
        div {
            @for url in picture_urls {
                img src=(url);
            }
        }
    };

    base_document(&event_title(event), content)
}

// ============================================================================
// Tests
// ============================================================================
