//! Glob-filtered directory discovery.
//!
//! Patterns are matched against the file name only, never the full path, so
//! `*.yaml` selects `p1.yaml` regardless of where the directory lives.
//! Results are sorted by path so discovery order is stable across runs.

use crate::error::{PrompterError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

/// Compile a list of glob patterns into a single matcher.
///
/// Blank patterns are skipped. An invalid pattern is a configuration error.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized = pattern.trim();
        if normalized.is_empty() {
            continue;
        }
        let glob = Glob::new(normalized).map_err(|e| {
            PrompterError::ConfigurationError(format!("invalid glob '{}': {}", normalized, e))
        })?;
        builder.add(glob);
    }

    builder.build().map_err(|e| {
        PrompterError::ConfigurationError(format!("failed to build glob set: {}", e))
    })
}

/// Include/exclude filter over file names.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl FileFilter {
    /// Build a filter that accepts names matching `include` and not `exclude`.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include)?,
            exclude: build_globset(exclude)?,
        })
    }

    /// Whether a file name passes the filter.
    pub fn matches(&self, file_name: &str) -> bool {
        self.include.is_match(file_name) && !self.exclude.is_match(file_name)
    }
}

/// List regular files directly inside `dir` that pass `filter`, sorted by path.
pub fn discover_files(dir: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PrompterError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PrompterError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            log::debug!("skipping non-UTF-8 file name in '{}'", dir.display());
            continue;
        };
        if filter.matches(file_name) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Extension-stripped base name of a file, e.g. `color` for `wildcards/color.txt`.
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
