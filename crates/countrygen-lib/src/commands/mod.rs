pub mod generate;
pub mod lookup;
pub mod version;

use clap::{ArgMatches, Command};

use crate::config::GeneratorConfig;
use crate::errors::{GenError, Result};

use generate::GenerateOptions;

/// Attach every subcommand to `root`.
pub fn register_commands(root: Command) -> Command {
    root.subcommand(generate::generate_command())
        .subcommand(lookup::lookup_command())
        .subcommand(version::version_command())
}

/// Dispatch a parsed root invocation.
///
/// No subcommand means `generate` with default options, writing to stdout.
pub async fn dispatch_command(matches: &ArgMatches, config: GeneratorConfig) -> Result<()> {
    match matches.subcommand() {
        Some(("generate", sub)) => {
            let options = GenerateOptions::from_matches(sub)?;
            generate::handle_generate(&options, config).await
        }
        Some(("lookup", sub)) => lookup::handle_lookup(sub, &config).await,
        Some(("version", sub)) => version::handle_version(sub),
        Some((name, _)) => Err(GenError::Command(format!("unknown command: {}", name))),
        None => generate::handle_generate(&GenerateOptions::default(), config).await,
    }
}
