//! Configuration types and defaults for prompter.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "prompter.yaml";

/// Serialization format for rendered payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// A JSON array of payload objects (default).
    #[default]
    Json,
    /// A YAML sequence of payload mappings.
    Yaml,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

// ============================================================================
// Default value functions for serde
// ============================================================================

pub(crate) fn default_payloads_dir() -> String {
    "payloads".to_string()
}

pub(crate) fn default_wildcards_dir() -> String {
    "wildcards".to_string()
}

pub(crate) fn default_payload_globs() -> Vec<String> {
    crate::payload::default_payload_globs()
}

pub(crate) fn default_template_globs() -> Vec<String> {
    crate::payload::default_template_globs()
}

pub(crate) fn default_wildcard_globs() -> Vec<String> {
    crate::wildcards::default_wildcard_globs()
}
