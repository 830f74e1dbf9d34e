//! Relative links from generated pages back to the source images.
//!
//! Pages live under the output root, pictures stay under the input root, and
//! the two trees can sit anywhere on disk relative to each other. Each link is
//! therefore computed per page: both sides are resolved against the current
//! working directory, normalized lexically, then diffed.
//!
//! ```text
//! page dir:  site/2024-01-01
//! picture:   archive/2024-01-01/morning/a.jpg
//! link:      ../../archive/2024-01-01/morning/a.jpg
//! ```
//!
//! Links are URLs, so every path segment is percent-encoded: a picture called
//! `IMG#1.jpg` becomes `IMG%231.jpg`, otherwise the browser would read `#1.jpg`
//! as a fragment.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Bytes escaped inside one path segment. `:` is included so a bare name like
/// `morning:2` is not read as a URL scheme, and `\` because browsers treat it as
/// a separator.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path of `to` as seen from the directory `from_dir`.
///
/// Fails only when a relative input cannot be made absolute (the current
/// working directory is gone or the path is empty).
pub fn relative_path(from_dir: &Path, to: &Path) -> io::Result<PathBuf> {
    let base = normalize(&std::path::absolute(from_dir)?);
    let target = normalize(&std::path::absolute(to)?);

    // Only fails across different Windows drive prefixes; fall back to the
    // absolute target there.
    let rel = pathdiff::diff_paths(&target, &base).unwrap_or(target);
    if rel.as_os_str().is_empty() {
        return Ok(PathBuf::from("."));
    }
    Ok(rel)
}

/// [`relative_path`] rendered as a URL path with `/` separators.
pub fn relative_url(from_dir: &Path, to: &Path) -> io::Result<String> {
    relative_path(from_dir, to).map(|p| to_url(&p))
}

/// Percent-encode a single file or directory name for use in a URL path.
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// Render a filesystem path as a URL path: `/` separators, encoded segments.
pub fn to_url(path: &Path) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                segments.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::RootDir => {
                if segments.is_empty() {
                    segments.push(String::new());
                }
            }
            Component::CurDir => segments.push(".".to_string()),
            Component::ParentDir => segments.push("..".to_string()),
            Component::Normal(name) => segments.push(encode_segment(&name.to_string_lossy())),
        }
    }
    segments.join("/")
}

/// Drop `.` and resolve `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
