//! Payload discovery and the name-keyed registry.

use super::defaults::PayloadDefaults;
use super::raw::{Payload, RawPayload};
use crate::error::{PrompterError, Result};
use crate::fs::{FileFilter, discover_files, file_stem};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File patterns treated as payloads by default.
pub const DEFAULT_PAYLOAD_GLOBS: &[&str] = &["*.yaml", "*.yml"];

/// File patterns treated as templates (never loaded) by default.
pub const DEFAULT_TEMPLATE_GLOBS: &[&str] = &["*.tmpl.yaml", "*.tmpl.yml"];

pub fn default_payload_globs() -> Vec<String> {
    DEFAULT_PAYLOAD_GLOBS.iter().map(|s| s.to_string()).collect()
}

pub fn default_template_globs() -> Vec<String> {
    DEFAULT_TEMPLATE_GLOBS.iter().map(|s| s.to_string()).collect()
}

/// Which files in the payloads directory are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub payload_globs: Vec<String>,
    pub template_globs: Vec<String>,
    /// Restrict loading to these payload names. `None` loads everything.
    pub names: Option<Vec<String>>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            payload_globs: default_payload_globs(),
            template_globs: default_template_globs(),
            names: None,
        }
    }
}

/// List payload files in `dir`, excluding templates, sorted by path.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Matching files (possibly empty)
/// * `Err(PrompterError::ConfigurationError)` - `dir` does not exist, or a glob is invalid
/// * `Err(PrompterError::IoError)` - `dir` could not be listed
pub fn discover_payload_files(dir: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PrompterError::ConfigurationError(format!(
            "payloads directory '{}' not found",
            dir.display()
        )));
    }

    let filter = FileFilter::new(&options.payload_globs, &options.template_globs)?;
    discover_files(dir, &filter)
}

/// Validated payloads keyed by file stem, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct PayloadRegistry {
    payloads: BTreeMap<String, Payload>,
}

impl PayloadRegistry {
    /// Discover, parse, validate, and default every payload in `dir`.
    ///
    /// The first invalid file aborts the whole load; no partial registry is
    /// returned. Two files with the same stem (`p1.yaml` and `p1.yml`) are a
    /// configuration error.
    pub fn load<P: AsRef<Path>>(
        dir: P,
        options: &DiscoveryOptions,
        defaults: &PayloadDefaults,
    ) -> Result<Self> {
        let dir = dir.as_ref();
        let mut payloads = BTreeMap::new();

        for path in discover_payload_files(dir, options)? {
            if let Some(names) = &options.names
                && !file_stem(&path).is_some_and(|stem| names.contains(&stem))
            {
                log::debug!("skipping '{}' (not selected)", path.display());
                continue;
            }

            let payload = RawPayload::load(&path)?.normalize(defaults)?;
            log::debug!("loaded payload '{}' from '{}'", payload.name(), path.display());
            if let Some(previous) = payloads.insert(payload.name().to_string(), payload) {
                return Err(PrompterError::ConfigurationError(format!(
                    "payload name '{}' is used by both '{}' and '{}'",
                    previous.name(),
                    previous.path().display(),
                    path.display()
                )));
            }
        }

        if let Some(names) = &options.names {
            let missing: Vec<&str> = names
                .iter()
                .filter(|n| !payloads.contains_key(n.as_str()))
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                return Err(PrompterError::ConfigurationError(format!(
                    "payload(s) not found in '{}': {}",
                    dir.display(),
                    missing.join(", ")
                )));
            }
        }

        log::info!("loaded {} payload(s) from '{}'", payloads.len(), dir.display());
        Ok(Self { payloads })
    }

    pub fn get(&self, name: &str) -> Option<&Payload> {
        self.payloads.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.payloads.keys().map(String::as_str)
    }

    /// Payloads in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Payload> {
        self.payloads.values()
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}
