//! Implementation of the `prompter sample` command.

use crate::cli::SampleArgs;
use prompter::WildcardStore;
use prompter::config::Config;
use prompter::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Execute the `prompter sample` command.
pub fn cmd_sample(config: Config, args: &SampleArgs) -> Result<()> {
    let dir = args
        .wildcards_dir
        .clone()
        .unwrap_or_else(|| config.wildcards_path());
    let store = WildcardStore::with_globs(&dir, &config.wildcard_globs)?;

    if !store.contains(&args.name) {
        log::warn!(
            "wildcard '{}' not found in '{}'; printing the name",
            args.name,
            dir.display()
        );
    }

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for line in draw(&store, &args.name, args.count, &mut rng)? {
        println!("{}", line);
    }
    Ok(())
}

fn draw<R: Rng>(store: &WildcardStore, name: &str, count: usize, rng: &mut R) -> Result<Vec<String>> {
    (0..count).map(|_| store.sample(name, rng)).collect()
}
