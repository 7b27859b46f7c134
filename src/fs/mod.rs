//! Filesystem utilities for prompter.
//!
//! This module provides the glob-filtered, non-recursive directory listing
//! shared by payload discovery and the wildcard index.

mod discover;

pub use discover::{FileFilter, build_globset, discover_files, file_stem};
