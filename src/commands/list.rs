//! Implementation of the `prompter list` command.

use prompter::{PayloadRegistry, PrompterOptions};
use prompter::config::Config;
use prompter::error::Result;
use prompter::payload::PayloadDefaults;

/// Execute the `prompter list` command.
///
/// Loads (and therefore validates) every payload, then prints one line per
/// payload with its source file.
pub fn cmd_list(config: Config) -> Result<()> {
    let options = PrompterOptions::from(&config);
    let defaults = PayloadDefaults::with_batch_size(config.batch_size);
    let registry = PayloadRegistry::load(&options.payloads_dir, &options.discovery, &defaults)?;

    if registry.is_empty() {
        println!("No payloads found in '{}'.", config.payloads_dir);
        return Ok(());
    }

    print!("{}", format_listing(&registry));
    Ok(())
}

fn format_listing(registry: &PayloadRegistry) -> String {
    let width = registry.names().map(str::len).max().unwrap_or(0);

    let mut output = String::new();
    for payload in registry.iter() {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            payload.name(),
            payload.path().display(),
            width = width
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompter::payload::DiscoveryOptions;
    use tempfile::TempDir;

    #[test]
    fn test_listing_aligns_names() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.yaml"), "prompt: x").unwrap();
        std::fs::write(temp_dir.path().join("longer.yaml"), "prompt: y").unwrap();

        let registry = PayloadRegistry::load(
            temp_dir.path(),
            &DiscoveryOptions::default(),
            &PayloadDefaults::default(),
        )
        .unwrap();
        let listing = format_listing(&registry);
        let lines: Vec<_> = listing.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("{:<6}  ", "a")));
        assert!(lines[0].ends_with("a.yaml"));
        assert!(lines[1].starts_with("longer  "));
    }
}
