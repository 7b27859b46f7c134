//! The rendering facade.
//!
//! [`Prompter`] loads every payload once at construction, then renders them
//! on demand. Each call to [`Prompter::render_payloads`] draws fresh wildcard
//! samples, so two calls usually produce different prompts unless the
//! randomness source is seeded and recreated.

use crate::config::Config;
use crate::error::Result;
use crate::payload::{
    DiscoveryOptions, PROMPT_KEY, PayloadDefaults, PayloadRegistry, RenderedPayload,
};
use crate::prompt::PromptRenderer;
use crate::wildcards::{WildcardStore, default_wildcard_globs};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_yaml::Value;
use std::path::PathBuf;

/// Construction parameters for a [`Prompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrompterOptions {
    /// Directory of payload files. Must exist.
    pub payloads_dir: PathBuf,
    /// Directory of wildcard word-lists. `None` or a missing directory
    /// disables wildcard resolution.
    pub wildcards_dir: Option<PathBuf>,
    /// `batch_size` for payloads that omit it.
    pub batch_size: Option<u32>,
    /// Seed for the default randomness source.
    pub seed: Option<u64>,
    pub discovery: DiscoveryOptions,
    pub wildcard_globs: Vec<String>,
}

impl PrompterOptions {
    pub fn new(payloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            payloads_dir: payloads_dir.into(),
            wildcards_dir: None,
            batch_size: None,
            seed: None,
            discovery: DiscoveryOptions::default(),
            wildcard_globs: default_wildcard_globs(),
        }
    }

    pub fn with_wildcards_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.wildcards_dir = Some(dir.into());
        self
    }

    pub fn with_batch_size(mut self, batch_size: Option<u32>) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Only load the named payloads.
    pub fn with_names(mut self, names: Option<Vec<String>>) -> Self {
        self.discovery.names = names;
        self
    }
}

impl From<&Config> for PrompterOptions {
    fn from(config: &Config) -> Self {
        Self {
            payloads_dir: config.payloads_path(),
            wildcards_dir: Some(config.wildcards_path()),
            batch_size: config.batch_size,
            seed: config.seed,
            discovery: DiscoveryOptions {
                payload_globs: config.payload_globs.clone(),
                template_globs: config.template_globs.clone(),
                names: None,
            },
            wildcard_globs: config.wildcard_globs.clone(),
        }
    }
}

/// Loads payloads and renders their prompts against one wildcard store.
#[derive(Debug)]
pub struct Prompter<R = StdRng> {
    registry: PayloadRegistry,
    store: WildcardStore,
    rng: R,
}

impl Prompter<StdRng> {
    /// Build a prompter with a [`StdRng`] seeded from `options.seed`, or from
    /// the OS when no seed is given.
    pub fn new(options: &PrompterOptions) -> Result<Self> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(options, rng)
    }
}

impl<R: Rng> Prompter<R> {
    /// Build a prompter drawing wildcard samples from `rng`.
    ///
    /// Fails if the payloads directory is missing or any payload is invalid.
    pub fn with_rng(options: &PrompterOptions, rng: R) -> Result<Self> {
        let defaults = PayloadDefaults::with_batch_size(options.batch_size);
        let registry = PayloadRegistry::load(&options.payloads_dir, &options.discovery, &defaults)?;

        let store = match &options.wildcards_dir {
            Some(dir) => WildcardStore::with_globs(dir, &options.wildcard_globs)?,
            None => WildcardStore::empty(),
        };

        Ok(Self {
            registry,
            store,
            rng,
        })
    }

    pub fn registry(&self) -> &PayloadRegistry {
        &self.registry
    }

    pub fn store(&self) -> &WildcardStore {
        &self.store
    }

    /// Render every payload in registry order.
    pub fn render_payloads(&mut self) -> Result<Vec<RenderedPayload>> {
        let renderer = PromptRenderer::new(&self.store);
        let mut rendered = Vec::with_capacity(self.registry.len());

        for payload in self.registry.iter() {
            let prompt = renderer.render(payload.prompt(), &mut self.rng)?;
            log::debug!("rendered '{}': {}", payload.name(), prompt);

            let mut fields = payload.fields().clone();
            fields.insert(Value::from(PROMPT_KEY), Value::from(prompt));
            rendered.push(RenderedPayload::new(payload.name(), fields));
        }

        Ok(rendered)
    }
}
