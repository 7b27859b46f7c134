//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PrompterError, Result};
use crate::fs::build_globset;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Relative directories in the file are resolved against the directory
    /// containing the config file, so a config works from any working
    /// directory.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrompterError::IoError)` - The file could not be read
    /// * `Err(PrompterError::ConfigurationError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| PrompterError::io(path, e))?;

        let mut config = Self::from_yaml(&content).map_err(|e| {
            PrompterError::ConfigurationError(format!(
                "config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PrompterError::ConfigurationError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PrompterError::SerializeError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `payloads_dir` must be non-empty
    /// - `batch_size`, when set, must be positive
    /// - `payload_globs` and `wildcard_globs` must contain at least one pattern
    /// - every glob must compile
    pub fn validate(&self) -> Result<()> {
        if self.payloads_dir.trim().is_empty() {
            return Err(PrompterError::ConfigurationError(
                "config validation failed: payloads_dir must be non-empty".to_string(),
            ));
        }

        if self.batch_size == Some(0) {
            return Err(PrompterError::ConfigurationError(
                "config validation failed: batch_size must be greater than 0".to_string(),
            ));
        }

        for (field, globs) in [
            ("payload_globs", &self.payload_globs),
            ("wildcard_globs", &self.wildcard_globs),
        ] {
            if globs.iter().all(|g| g.trim().is_empty()) {
                return Err(PrompterError::ConfigurationError(format!(
                    "config validation failed: {} must contain at least one pattern",
                    field
                )));
            }
        }

        for globs in [
            &self.payload_globs,
            &self.template_globs,
            &self.wildcard_globs,
        ] {
            build_globset(globs).map_err(|e| {
                PrompterError::ConfigurationError(format!("config validation failed: {}", e))
            })?;
        }

        Ok(())
    }

    /// Rewrite relative directories as paths under `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        self.payloads_dir = resolve(base, &self.payloads_dir);
        self.wildcards_dir = resolve(base, &self.wildcards_dir);
    }

    pub fn payloads_path(&self) -> PathBuf {
        PathBuf::from(&self.payloads_dir)
    }

    pub fn wildcards_path(&self) -> PathBuf {
        PathBuf::from(&self.wildcards_dir)
    }
}

fn resolve(base: &Path, dir: &str) -> String {
    let path = Path::new(dir);
    if path.is_absolute() || base.as_os_str().is_empty() {
        dir.to_string()
    } else {
        base.join(path).to_string_lossy().into_owned()
    }
}
