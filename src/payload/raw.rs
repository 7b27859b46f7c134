//! Parsed payload files and their validated form.

use super::PROMPT_KEY;
use super::defaults::{PayloadDefaults, apply_defaults};
use crate::error::{PrompterError, Result};
use crate::fs::file_stem;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// A payload file parsed into a generic mapping.
///
/// The source path is kept beside the mapping, never inside it, so it cannot
/// leak into rendered output.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload {
    name: String,
    path: PathBuf,
    fields: Mapping,
}

impl RawPayload {
    /// Load and parse a payload file, naming it after its file stem.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PrompterError::io(path, e))?;
        let name = file_stem(path).ok_or_else(|| {
            PrompterError::ConfigurationError(format!(
                "payload file '{}' has no usable name",
                path.display()
            ))
        })?;
        Self::parse(name, path, &content)
    }

    /// Parse payload YAML. An empty document is an empty mapping.
    pub fn parse(name: impl Into<String>, path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_yaml::from_str(content).map_err(|e| PrompterError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let fields = match value {
            Value::Mapping(fields) => fields,
            Value::Null => Mapping::new(),
            other => {
                return Err(PrompterError::validation(
                    &path,
                    format!("expected a mapping, found {}", value_kind(&other)),
                ));
            }
        };

        Ok(Self {
            name: name.into(),
            path,
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    /// Check that `prompt` is present and is a non-empty string.
    pub fn validate(&self) -> Result<()> {
        match self.fields.get(PROMPT_KEY) {
            None => Err(PrompterError::validation(
                &self.path,
                "missing required field 'prompt'",
            )),
            Some(Value::String(prompt)) if prompt.is_empty() => Err(PrompterError::validation(
                &self.path,
                "field 'prompt' must not be empty",
            )),
            Some(Value::String(_)) => Ok(()),
            Some(other) => Err(PrompterError::validation(
                &self.path,
                format!("field 'prompt' must be a string, found {}", value_kind(other)),
            )),
        }
    }

    /// Validate and merge in defaults, producing a new [`Payload`].
    pub fn normalize(&self, defaults: &PayloadDefaults) -> Result<Payload> {
        self.validate()?;
        Ok(Payload {
            name: self.name.clone(),
            path: self.path.clone(),
            fields: apply_defaults(&self.fields, defaults),
        })
    }
}

/// A validated payload with every default field present.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    name: String,
    path: PathBuf,
    fields: Mapping,
}

impl Payload {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File the payload was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The prompt text, before wildcard resolution.
    pub fn prompt(&self) -> &str {
        // Validation guarantees a string prompt.
        self.fields
            .get(PROMPT_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
