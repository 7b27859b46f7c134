//! Word-list file reading.

use crate::error::{PrompterError, Result};
use std::path::Path;

/// Split word-list content into trimmed, non-blank lines, in file order.
pub(crate) fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Read and parse a UTF-8 word-list file.
pub(crate) fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| PrompterError::io(path, e))?;
    Ok(parse_word_list(&content))
}
