//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a prompter run.
///
/// This struct represents the contents of `prompter.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Inputs
    // =========================================================================
    /// Directory of payload YAML files (required to exist at render time).
    #[serde(default = "default_payloads_dir")]
    pub payloads_dir: String,

    /// Directory of wildcard word-lists. A missing directory disables
    /// wildcard resolution.
    #[serde(default = "default_wildcards_dir")]
    pub wildcards_dir: String,

    // =========================================================================
    // Rendering
    // =========================================================================
    /// `batch_size` applied to payloads that do not set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,

    /// Seed for wildcard sampling. Unset means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Format used by `prompter render`.
    #[serde(default)]
    pub output_format: OutputFormat,

    // =========================================================================
    // Discovery
    // =========================================================================
    /// File-name globs selecting payload files.
    #[serde(default = "default_payload_globs")]
    pub payload_globs: Vec<String>,

    /// File-name globs for template files, which are never loaded.
    #[serde(default = "default_template_globs")]
    pub template_globs: Vec<String>,

    /// File-name globs selecting wildcard word-lists.
    #[serde(default = "default_wildcard_globs")]
    pub wildcard_globs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payloads_dir: default_payloads_dir(),
            wildcards_dir: default_wildcards_dir(),
            batch_size: None,
            seed: None,
            output_format: OutputFormat::default(),
            payload_globs: default_payload_globs(),
            template_globs: default_template_globs(),
            wildcard_globs: default_wildcard_globs(),
        }
    }
}
