//! Pattern expansion and entry collection
//!
//! A pattern is one of:
//!
//! - a glob containing `**`: the subtree below the part before the marker is
//!   walked and every path matching the whole pattern is kept
//! - an existing directory: its immediate children
//! - anything else: a plain glob (a file path is a glob matching itself)

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use ignore::{Walk, WalkBuilder};
use tracing::{debug, trace};

use crate::entry::Entry;
use crate::error::LseError;
use crate::sort::sort_entries;

pub(crate) const RECURSIVE_MARKER: &str = "**";

/// `*` and `?` stay within one path component, `**` crosses them.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A directory and its immediate children, used by the grouped recursive listing.
#[derive(Debug, Clone)]
pub struct DirBlock {
    pub path: PathBuf,
    pub entries: Vec<Entry>,
}

/// Expand a pattern into the paths it names.
pub fn collect_paths(pattern: &str) -> Result<Vec<PathBuf>, LseError> {
    if pattern.contains(RECURSIVE_MARKER) {
        return walk_matching(pattern);
    }

    let path = Path::new(pattern);
    if path.is_dir() {
        return read_children(path);
    }

    let mut paths = Vec::new();
    for matched in glob::glob_with(pattern, MATCH_OPTIONS)? {
        match matched {
            Ok(p) => paths.push(p),
            Err(e) => trace!("skipping unreadable glob match: {}", e),
        }
    }
    Ok(paths)
}

/// Expand a pattern and stat every match. Paths that cannot be stat'ed are skipped.
pub fn collect_entries(pattern: &str, show_all: bool) -> Result<Vec<Entry>, LseError> {
    let paths = collect_paths(pattern)?;
    Ok(entries_from_paths(paths, show_all))
}

/// Immediate children of a directory known to exist.
///
/// Unlike [`collect_entries`] the path is never interpreted as a glob, so
/// directory names containing `[`, `*` or `**` are listed literally.
pub fn list_directory(dir: &Path, show_all: bool) -> Result<Vec<Entry>, LseError> {
    let paths = read_children(dir)?;
    Ok(entries_from_paths(paths, show_all))
}

/// Drop dot-prefixed entries.
pub fn retain_visible(entries: &mut Vec<Entry>) {
    entries.retain(|e| !e.is_hidden());
}

/// Total size of every non-directory below `path`, without following links.
pub fn dir_size(path: &Path) -> u64 {
    let mut total = 0;
    for result in walker(path) {
        let Ok(entry) = result else {
            continue;
        };
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        if let Ok(meta) = entry.metadata() {
            total += meta.len();
        }
    }
    total
}

/// Every directory below the pattern's listing, in pre-order, each with its children.
///
/// Children are sorted the same way the listing shows them, so blocks come
/// out in display order. Symlinked directories are not descended.
pub fn recurse_scan(
    pattern: &str,
    show_all: bool,
    dirs_first: bool,
) -> Result<Vec<DirBlock>, LseError> {
    let mut top = collect_entries(pattern, show_all)?;
    sort_entries(&mut top, dirs_first);

    let mut blocks = Vec::new();
    for entry in top.iter().filter(|e| e.is_dir()) {
        scan_dir(&entry.path, show_all, dirs_first, &mut blocks);
    }
    Ok(blocks)
}

fn scan_dir(dir: &Path, show_all: bool, dirs_first: bool, blocks: &mut Vec<DirBlock>) {
    let mut entries = list_directory(dir, show_all).unwrap_or_else(|e| {
        debug!("{}", e);
        Vec::new()
    });
    sort_entries(&mut entries, dirs_first);

    let subdirs: Vec<PathBuf> = entries
        .iter()
        .filter(|e| e.is_dir())
        .map(|e| e.path.clone())
        .collect();

    blocks.push(DirBlock {
        path: dir.to_path_buf(),
        entries,
    });

    for sub in subdirs {
        scan_dir(&sub, show_all, dirs_first, blocks);
    }
}

fn entries_from_paths(paths: Vec<PathBuf>, show_all: bool) -> Vec<Entry> {
    let mut entries: Vec<Entry> = paths
        .into_iter()
        .filter_map(|path| match Entry::from_path(&path) {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!("skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect();

    if !show_all {
        retain_visible(&mut entries);
    }
    entries
}

/// Children of a directory, sorted by file name.
fn read_children(dir: &Path) -> Result<Vec<PathBuf>, LseError> {
    let read = fs::read_dir(dir).map_err(|e| LseError::io(dir, e))?;

    let mut names: Vec<_> = read.filter_map(|e| e.ok()).map(|e| e.file_name()).collect();
    names.sort();

    Ok(names.into_iter().map(|name| join_clean(dir, name)).collect())
}

/// `dir.join(name)`, except that entries of `.` are shown without the `./`.
fn join_clean(dir: &Path, name: impl AsRef<Path>) -> PathBuf {
    if dir == Path::new(".") {
        name.as_ref().to_path_buf()
    } else {
        dir.join(name)
    }
}

fn walk_matching(pattern: &str) -> Result<Vec<PathBuf>, LseError> {
    let matcher = Pattern::new(pattern)?;

    let prefix = pattern.split(RECURSIVE_MARKER).next().unwrap_or_default();
    let implicit_root = prefix.is_empty();
    let root = if implicit_root { Path::new(".") } else { Path::new(prefix) };

    let mut paths = Vec::new();
    for result in walker(root) {
        let entry = match result {
            Ok(e) => e,
            Err(e) => {
                trace!("walk error under {}: {}", root.display(), e);
                continue;
            }
        };

        let path = entry.path();
        let candidate = if implicit_root {
            path.strip_prefix(".").unwrap_or(path)
        } else {
            path
        };

        if matcher.matches_path_with(candidate, MATCH_OPTIONS) {
            paths.push(candidate.to_path_buf());
        }
    }
    Ok(paths)
}

/// Plain recursive walk: no ignore files, hidden entries included, links not followed.
fn walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}
