use std::path::PathBuf;

/// Creates the root clap Command with global `--verbose` and `--config` flags.
///
/// Subcommands are attached by `commands::register_commands`. Running with no
/// subcommand generates to stdout.
pub fn create_root_command() -> clap::Command {
    clap::Command::new("countrygen")
        .about("Generate a Rust country-name to ISO 3166-1 alpha-2 lookup table")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .help("Enable debug logging on stderr"),
        )
        .arg(
            clap::Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Load settings from a JSON config file"),
        )
}

/// Returns whether verbose mode is active based on parsed matches.
pub fn is_verbose(matches: &clap::ArgMatches) -> bool {
    matches.get_flag("verbose")
}

/// Returns the `--config` path, if one was given.
pub fn config_path(matches: &clap::ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_command_has_verbose_flag() {
        let cmd = create_root_command();
        let matches = cmd.try_get_matches_from(["countrygen", "--verbose"]).unwrap();
        assert!(is_verbose(&matches));
    }

    #[test]
    fn test_short_verbose_flag() {
        let cmd = create_root_command();
        let matches = cmd.try_get_matches_from(["countrygen", "-v"]).unwrap();
        assert!(is_verbose(&matches));
    }

    #[test]
    fn test_no_flags() {
        let cmd = create_root_command();
        let matches = cmd.try_get_matches_from(["countrygen"]).unwrap();
        assert!(!is_verbose(&matches));
        assert_eq!(config_path(&matches), None);
    }

    #[test]
    fn test_config_path() {
        let cmd = create_root_command();
        let matches = cmd
            .try_get_matches_from(["countrygen", "--config", "gen.json"])
            .unwrap();
        assert_eq!(config_path(&matches), Some(PathBuf::from("gen.json")));
    }
}
