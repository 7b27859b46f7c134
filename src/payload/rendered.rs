//! Payloads ready for hand-off to a request-issuing consumer.

use super::PROMPT_KEY;
use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// A payload whose prompt has every wildcard resolved.
///
/// Serializes as the bare field mapping; the name is for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPayload {
    name: String,
    fields: Mapping,
}

impl RenderedPayload {
    pub(crate) fn new(name: impl Into<String>, fields: Mapping) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Base name of the payload file this was rendered from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The fully resolved prompt.
    pub fn prompt(&self) -> &str {
        self.fields
            .get(PROMPT_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl Serialize for RenderedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
