//! Prompter: wildcard resolution and payload rendering for image-generation
//! request pipelines.
//!
//! Payload descriptions are YAML files in a payloads directory. Each one is
//! validated, filled with generation defaults, and has its `prompt` rewritten
//! by replacing `__name__` tokens with a random line from `name.txt` in the
//! wildcards directory.
//!
//! ```no_run
//! use prompter::{Prompter, PrompterOptions};
//!
//! let options = PrompterOptions::new("payloads").with_wildcards_dir("wildcards");
//! let mut prompter = Prompter::new(&options).unwrap();
//! for payload in prompter.render_payloads().unwrap() {
//!     println!("{}", payload.prompt());
//! }
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod payload;
pub mod prompt;
pub mod prompter;
pub mod wildcards;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{PrompterError, Result};
pub use payload::{Payload, PayloadDefaults, PayloadRegistry, RawPayload, RenderedPayload};
pub use prompt::{PromptRenderer, Segment};
pub use prompter::{Prompter, PrompterOptions};
pub use wildcards::WildcardStore;
