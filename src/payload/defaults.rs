//! Default generation parameters.

use serde_yaml::{Mapping, Value};

/// Default values merged into payloads that omit them.
///
/// Only `batch_size` is caller-configurable; the rest are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadDefaults {
    pub batch_size: u32,
}

impl Default for PayloadDefaults {
    fn default() -> Self {
        Self { batch_size: 1 }
    }
}

impl PayloadDefaults {
    /// Defaults with a caller-supplied `batch_size`, or the standard one.
    pub fn with_batch_size(batch_size: Option<u32>) -> Self {
        match batch_size {
            Some(batch_size) => Self { batch_size },
            None => Self::default(),
        }
    }

    /// The default table, in the order keys are appended to a payload.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("neg_prompt", Value::from("")),
            ("seed", Value::from(-1)),
            ("steps", Value::from(20)),
            ("cfg", Value::from(7)),
            ("width", Value::from(512)),
            ("height", Value::from(512)),
            ("sampler", Value::from("Euler")),
            ("batch_size", Value::from(self.batch_size)),
            ("batch_count", Value::from(1)),
        ]
    }
}

/// Return a copy of `fields` with every missing default key added.
///
/// Keys already present keep their values, whatever their type, so applying
/// the defaults a second time changes nothing.
pub fn apply_defaults(fields: &Mapping, defaults: &PayloadDefaults) -> Mapping {
    let mut merged = fields.clone();
    for (key, value) in defaults.fields() {
        if !merged.contains_key(key) {
            merged.insert(Value::from(key), value);
        }
    }
    merged
}
