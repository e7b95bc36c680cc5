//! Picture discovery: the extension filter and the recursive walk that turns
//! a raw selection of files and directories into a flat picture list.

use crate::config::{IMAGE_FILTER_DESCRIPTION, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{AppError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Kind of a filesystem entry, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// A probed filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub readable: bool,
}

impl Entry {
    /// Looks the entry up on disk. Fails if it does not exist (anymore).
    pub fn probe(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;
        let kind = if metadata.is_file() {
            EntryKind::File
        } else if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        };
        let readable = match kind {
            EntryKind::File => fs::File::open(path).is_ok(),
            EntryKind::Directory => fs::read_dir(path).is_ok(),
            EntryKind::Other => false,
        };

        Ok(Self {
            path: path.to_path_buf(),
            kind,
            readable,
        })
    }
}

/// Accepts readable regular files whose extension is in a fixed set.
///
/// Matching is case-insensitive on the text after the last '.'; a name
/// such as `.jpg` has no extension. Directories are never accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    description: String,
    extensions: Vec<String>,
}

impl PathFilter {
    /// Creates a filter. Extensions are lowercased and stripped of a leading dot.
    pub fn new<S: AsRef<str>>(description: impl Into<String>, extensions: &[S]) -> Result<Self> {
        let mut normalized: Vec<String> = Vec::with_capacity(extensions.len());
        for ext in extensions {
            let ext = ext.as_ref().trim().trim_start_matches('.').to_lowercase();
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        if normalized.is_empty() {
            return Err(AppError::InvalidFilter(
                "at least one extension is required".to_string(),
            ));
        }

        Ok(Self {
            description: description.into(),
            extensions: normalized,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns true if `entry` is a readable regular file with an accepted extension.
    pub fn accepts(&self, entry: &Entry) -> bool {
        entry.kind == EntryKind::File && entry.readable && self.matches_extension(&entry.path)
    }

    /// Checks only the extension of `path`, without touching the filesystem.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|accepted| *accepted == ext)
            })
            .unwrap_or(false)
    }

    /// The filter for the configured picture formats.
    pub fn supported_images() -> Result<Self> {
        Self::new(IMAGE_FILTER_DESCRIPTION, &SUPPORTED_IMAGE_EXTENSIONS)
    }
}

/// Raw entries picked by the user, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<PathBuf>,
}

impl Selection {
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            entries: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

/// Order in which the children of a directory are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildOrder {
    /// Whatever order the platform enumerates them in.
    #[default]
    Native,
    /// Siblings sorted by file name.
    ByName,
}

/// Flattens `selection` into the absolute paths of every picture reachable from it.
///
/// Walks depth-first in selection order. Directories are always descended
/// into, files are kept only if `filter` accepts them. Entries that vanish
/// or cannot be read are skipped, as are symlinks looping back onto an
/// ancestor directory. The same file reached twice is listed twice.
pub fn collect_pictures(
    selection: &Selection,
    filter: &PathFilter,
    order: ChildOrder,
) -> Vec<PathBuf> {
    let start = std::time::Instant::now();
    let mut pictures = Vec::new();

    for path in selection.iter() {
        let mut walker = WalkDir::new(path).follow_links(true);
        if order == ChildOrder::ByName {
            walker = walker.sort_by_file_name();
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping entry below {:?}: {}", path, e);
                    continue;
                }
            };
            if !entry.file_type().is_file() || !filter.matches_extension(entry.path()) {
                continue;
            }

            match Entry::probe(entry.path()) {
                Ok(probed) if filter.accepts(&probed) => pictures.push(absolute(&probed.path)),
                Ok(_) => {}
                Err(e) => debug!("Skipping {:?}: {}", entry.path(), e),
            }
        }
    }

    debug!(
        "Collected {} pictures from {} selected entries in {:?}",
        pictures.len(),
        selection.len(),
        start.elapsed()
    );
    pictures
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
