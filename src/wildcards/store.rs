//! The wildcard index and sampler.

use super::word_list::read_word_list;
use crate::error::Result;
use crate::fs::{FileFilter, discover_files, file_stem};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File patterns indexed by default.
pub const DEFAULT_WILDCARD_GLOBS: &[&str] = &["*.txt"];

pub fn default_wildcard_globs() -> Vec<String> {
    DEFAULT_WILDCARD_GLOBS.iter().map(|s| s.to_string()).collect()
}

/// Index of wildcard names to their word-list files.
///
/// The index is built once; the word lists themselves are read on every
/// [`sample`](Self::sample) call.
#[derive(Debug, Clone, Default)]
pub struct WildcardStore {
    index: BTreeMap<String, PathBuf>,
}

impl WildcardStore {
    /// A store with no wildcards. Every name samples to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index every `*.txt` file in `dir`.
    ///
    /// A missing directory yields an empty store rather than an error.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::with_globs(dir, &default_wildcard_globs())
    }

    /// Index every file in `dir` whose name matches one of `globs`.
    ///
    /// Files are indexed in sorted path order. If two files share a stem
    /// (`color.txt` and `color.list` with globs for both), the later one wins.
    pub fn with_globs<P: AsRef<Path>>(dir: P, globs: &[String]) -> Result<Self> {
        let dir = dir.as_ref();

        if !dir.exists() {
            log::debug!(
                "wildcards directory '{}' not found; wildcards resolve to their names",
                dir.display()
            );
            return Ok(Self::empty());
        }

        let filter = FileFilter::new(globs, &[])?;
        let mut index = BTreeMap::new();
        for path in discover_files(dir, &filter)? {
            let Some(name) = file_stem(&path) else {
                continue;
            };
            if let Some(previous) = index.insert(name.clone(), path) {
                log::debug!(
                    "wildcard '{}' from '{}' replaced by a later file",
                    name,
                    previous.display()
                );
            }
        }

        log::info!(
            "indexed {} wildcard(s) from '{}'",
            index.len(),
            dir.display()
        );
        Ok(Self { index })
    }

    /// Pick one line of `name`'s word list uniformly at random.
    ///
    /// Returns `name` unchanged when it is not indexed, or when its file has
    /// no non-blank lines. Fails only if the indexed file cannot be read.
    pub fn sample<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Result<String> {
        let Some(path) = self.index.get(name) else {
            log::debug!("unknown wildcard '{}'; keeping it as literal text", name);
            return Ok(name.to_string());
        };

        let lines = read_word_list(path)?;
        match lines.choose(rng) {
            Some(line) => Ok(line.clone()),
            None => {
                log::warn!(
                    "wildcard file '{}' has no entries; keeping '{}' as literal text",
                    path.display(),
                    name
                );
                Ok(name.to_string())
            }
        }
    }

    /// Current contents of `name`'s word list, or `None` if it is not indexed.
    pub fn lines(&self, name: &str) -> Result<Option<Vec<String>>> {
        self.index.get(name).map(|p| read_word_list(p)).transpose()
    }

    /// Whether `name` is indexed.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Backing file for `name`.
    pub fn path(&self, name: &str) -> Option<&Path> {
        self.index.get(name).map(PathBuf::as_path)
    }

    /// Indexed names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
