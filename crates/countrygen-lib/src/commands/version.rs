//! Version CLI command: display application version.
//!
//! Supports `--json` flag for machine-readable output.

use clap::{Arg, ArgMatches, Command};
use serde::Serialize;

use crate::errors::Result;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

const VERSION_INFO: VersionInfo = VersionInfo {
    name: "countrygen",
    version: env!("CARGO_PKG_VERSION"),
};

/// Build the `version` clap command.
pub fn version_command() -> Command {
    Command::new("version")
        .about("Show version information")
        .arg(
            Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Output version information as JSON"),
        )
}

/// Render the version line for `matches`.
pub fn version_text(matches: &ArgMatches) -> Result<String> {
    if matches.get_flag("json") {
        crate::json::serialize(&VERSION_INFO)
    } else {
        Ok(format!("{} version {}", VERSION_INFO.name, VERSION_INFO.version))
    }
}

/// Handle the `version` command.
pub fn handle_version(matches: &ArgMatches) -> Result<()> {
    println!("{}", version_text(matches)?);
    Ok(())
}
