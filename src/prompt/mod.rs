//! Wildcard substitution in prompt strings.
//!
//! # Syntax
//!
//! A prompt is split on `__`. The pieces alternate between literal text and
//! wildcard names, starting with literal text:
//!
//! ```text
//! a __color__ cat
//! └┬┘  └─┬─┘  └┬┘
//!  0     1     2     even = literal, odd = wildcard
//! ```
//!
//! The split is purely positional. Unbalanced delimiters are not an error:
//! `a __color` still treats `color` as a wildcard because it lands at index 1.

use crate::error::Result;
use crate::wildcards::WildcardStore;
use rand::Rng;

/// Delimiter that opens and closes a wildcard token.
pub const WILDCARD_DELIMITER: &str = "__";

/// One piece of a tokenized prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// Name to resolve through the wildcard store.
    Wildcard(&'a str),
}

/// Tokenize a prompt into alternating literal and wildcard segments.
///
/// A prompt without delimiters is a single literal segment.
pub fn segments(prompt: &str) -> Vec<Segment<'_>> {
    prompt
        .split(WILDCARD_DELIMITER)
        .enumerate()
        .map(|(i, chunk)| {
            if i % 2 == 0 {
                Segment::Literal(chunk)
            } else {
                Segment::Wildcard(chunk)
            }
        })
        .collect()
}

/// Resolves wildcard tokens in prompts using one [`WildcardStore`].
#[derive(Debug, Clone, Copy)]
pub struct PromptRenderer<'a> {
    store: &'a WildcardStore,
}

impl<'a> PromptRenderer<'a> {
    pub fn new(store: &'a WildcardStore) -> Self {
        Self { store }
    }

    /// Replace every wildcard segment with a sampled line and reassemble.
    pub fn render<R: Rng + ?Sized>(&self, prompt: &str, rng: &mut R) -> Result<String> {
        let mut rendered = String::with_capacity(prompt.len());

        for segment in segments(prompt) {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Wildcard(name) => rendered.push_str(&self.store.sample(name, rng)?),
            }
        }

        Ok(rendered)
    }
}
