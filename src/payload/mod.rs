//! Payload discovery, validation, and defaulting.
//!
//! A payload file is a YAML mapping describing one generation request. Only
//! `prompt` is required; the generation parameters below are filled in when
//! absent and every other key is passed through untouched.
//!
//! | field         | default   |
//! |---------------|-----------|
//! | `neg_prompt`  | `""`      |
//! | `seed`        | `-1`      |
//! | `steps`       | `20`      |
//! | `cfg`         | `7`       |
//! | `width`       | `512`     |
//! | `height`      | `512`     |
//! | `sampler`     | `"Euler"` |
//! | `batch_size`  | `1`       |
//! | `batch_count` | `1`       |
//!
//! Files matching a template glob (`*.tmpl.yaml` by default) are authoring
//! aids and are never loaded.

mod defaults;
mod raw;
mod registry;
mod rendered;

#[cfg(test)]
mod tests;

pub use defaults::{PayloadDefaults, apply_defaults};
pub use raw::{Payload, RawPayload};
pub use registry::{
    DEFAULT_PAYLOAD_GLOBS, DEFAULT_TEMPLATE_GLOBS, DiscoveryOptions, PayloadRegistry,
    default_payload_globs, default_template_globs, discover_payload_files,
};
pub use rendered::RenderedPayload;

/// Key holding the prompt text.
pub const PROMPT_KEY: &str = "prompt";
