//! Wildcard word-lists.
//!
//! A wildcard is a plain-text file in the wildcards directory whose base name
//! is the wildcard name (`color.txt` → `color`). Each non-blank line is one
//! candidate phrase.
//!
//! Two policies are deliberate:
//!
//! - **No caching.** Every [`WildcardStore::sample`] re-reads the backing
//!   file, so edits made between renders are picked up without rebuilding
//!   the store.
//! - **Identity fallback.** An unknown name, or a missing wildcards
//!   directory, resolves to the name itself instead of failing.

mod store;
mod word_list;


pub use store::{DEFAULT_WILDCARD_GLOBS, WildcardStore, default_wildcard_globs};
