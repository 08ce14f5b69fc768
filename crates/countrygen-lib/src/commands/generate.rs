//! Generate CLI command: fetch the dataset and emit the lookup module.
//!
//! Also the default when no subcommand is given.

use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

use crate::codegen::{self, Layout};
use crate::config::GeneratorConfig;
use crate::countries::{self, fetch::fetch_countries};
use crate::errors::Result;
use crate::http_client::HttpClient;
use crate::output;

/// Build the `generate` clap command.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Fetch country names and print the Rust lookup module")
        .aliases(["gen"])
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write to PATH atomically instead of stdout"),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("URL")
                .help("Override the dataset endpoint"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u32).range(1..))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("layout")
                .long("layout")
                .value_parser(Layout::all().iter().map(|l| l.as_str()).collect::<Vec<_>>())
                .help("Shape of the generated module"),
        )
}

/// Options parsed from `generate`, layered over a `GeneratorConfig`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerateOptions {
    pub output: Option<PathBuf>,
    pub url: Option<String>,
    pub timeout: Option<u32>,
    pub layout: Option<Layout>,
}

impl GenerateOptions {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            output: matches.get_one::<PathBuf>("output").cloned(),
            url: matches.get_one::<String>("url").cloned(),
            timeout: matches.get_one::<u32>("timeout").copied(),
            layout: matches
                .get_one::<String>("layout")
                .map(|s| s.parse())
                .transpose()?,
        })
    }

    /// Overwrite the config fields that were given on the command line.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(url) = &self.url {
            config.endpoint = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
    }
}

/// Fetch, derive and render. Returns the complete module text.
///
/// Names shared by several countries are logged and passed through.
pub async fn generate(config: &GeneratorConfig, http: &HttpClient) -> Result<String> {
    let countries = fetch_countries(http, &config.endpoint).await?;

    for collision in countries::collisions(&countries::entries(&countries)) {
        tracing::warn!(
            name = %collision.name,
            codes = ?collision.codes,
            "Name maps to several codes; the last one wins in the generated table"
        );
    }

    codegen::render(&countries, config.layout)
}

/// Handle the `generate` command.
pub async fn handle_generate(options: &GenerateOptions, mut config: GeneratorConfig) -> Result<()> {
    options.apply(&mut config);
    let http = HttpClient::new(&config)?;
    let module = generate(&config, &http).await?;

    match &options.output {
        Some(path) => {
            crate::fileops::write_atomic(path, module.as_bytes())?;
            output::success(&format!("Wrote {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(module.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
