//! Implementation of the `prompter render` command.

use crate::cli::RenderArgs;
use prompter::config::{Config, OutputFormat};
use prompter::error::{PrompterError, Result};
use prompter::{Prompter, PrompterOptions, RenderedPayload};

/// Execute the `prompter render` command.
pub fn cmd_render(config: Config, args: &RenderArgs) -> Result<()> {
    let config = super::with_source(config, &args.source);
    let format = args.format.unwrap_or(config.output_format);

    let names = (!args.name.is_empty()).then(|| args.name.clone());
    let options = PrompterOptions::from(&config)
        .with_names(names)
        .with_seed(args.seed.or(config.seed))
        .with_batch_size(args.batch_size.or(config.batch_size));

    let mut prompter = Prompter::new(&options)?;
    let payloads = prompter.render_payloads()?;

    println!("{}", format_payloads(&payloads, format)?);
    Ok(())
}

/// Serialize rendered payloads as a JSON array or YAML sequence.
pub fn format_payloads(payloads: &[RenderedPayload], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(payloads)
            .map_err(|e| PrompterError::SerializeError(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(payloads)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| PrompterError::SerializeError(e.to_string())),
    }
}
