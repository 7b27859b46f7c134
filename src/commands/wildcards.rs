//! Implementation of the `prompter wildcards` command.

use crate::cli::WildcardsArgs;
use prompter::WildcardStore;
use prompter::config::Config;
use prompter::error::Result;

/// Execute the `prompter wildcards` command.
pub fn cmd_wildcards(config: Config, args: &WildcardsArgs) -> Result<()> {
    let dir = args
        .wildcards_dir
        .clone()
        .unwrap_or_else(|| config.wildcards_path());
    let store = WildcardStore::with_globs(&dir, &config.wildcard_globs)?;

    if store.is_empty() {
        println!("No wildcards found in '{}'.", dir.display());
        return Ok(());
    }

    print!("{}", format_wildcards(&store)?);
    Ok(())
}

/// One line per wildcard: `__name__`, entry count, backing file.
fn format_wildcards(store: &WildcardStore) -> Result<String> {
    let width = store.names().map(|n| n.len() + 4).max().unwrap_or(0);

    let mut output = String::new();
    for name in store.names() {
        let count = store.lines(name)?.map(|lines| lines.len()).unwrap_or(0);
        let path = store
            .path(name)
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        output.push_str(&format!(
            "{:<width$}  {:>4}  {}\n",
            format!("__{}__", name),
            count,
            path,
            width = width
        ));
    }
    Ok(output)
}
