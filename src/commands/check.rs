//! Implementation of the `prompter check` command.
//!
//! Unlike `render`, which stops at the first invalid payload, `check` keeps
//! going so every broken file is reported in one run.

use prompter::{PrompterOptions, RawPayload};
use prompter::config::Config;
use prompter::error::Result;
use prompter::payload::{DiscoveryOptions, PayloadDefaults, discover_payload_files};
use std::path::{Path, PathBuf};

/// Outcome of checking one payload file.
#[derive(Debug)]
struct FileCheck {
    path: PathBuf,
    result: Result<()>,
}

/// Execute the `prompter check` command.
pub fn cmd_check(config: Config) -> Result<()> {
    let options = PrompterOptions::from(&config);
    let defaults = PayloadDefaults::with_batch_size(config.batch_size);
    let checks = check_payloads(&options.payloads_dir, &options.discovery, &defaults)?;

    let mut failed = 0;
    for check in &checks {
        match &check.result {
            Ok(()) => println!("OK    {}", check.path.display()),
            Err(e) => {
                failed += 1;
                println!("FAIL  {}", e);
            }
        }
    }

    println!();
    println!("{} payload(s) checked, {} failed", checks.len(), failed);

    // Exit with the first failure's code.
    match checks.into_iter().find_map(|c| c.result.err()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check_payloads(
    dir: &Path,
    options: &DiscoveryOptions,
    defaults: &PayloadDefaults,
) -> Result<Vec<FileCheck>> {
    let files = discover_payload_files(dir, options)?;

    Ok(files
        .into_iter()
        .map(|path| {
            let result = RawPayload::load(&path)
                .and_then(|raw| raw.normalize(defaults))
                .map(|_| ());
            FileCheck { path, result }
        })
        .collect())
}
