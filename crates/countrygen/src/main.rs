use countrygen_lib::cli::{config_path, create_root_command, is_verbose};
use countrygen_lib::commands::{dispatch_command, register_commands};
use countrygen_lib::config::GeneratorConfig;
use countrygen_lib::errors::{handle_command_error, handle_fatal};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Step 1: Parse arguments
    let matches = register_commands(create_root_command()).get_matches();

    // Step 2: Initialize Logger (stderr only)
    let verbose = is_verbose(&matches);
    countrygen_lib::logger::set_verbose(verbose);
    countrygen_lib::logger::init(verbose);

    // Step 3: Load config, then let subcommand flags override it
    let config = GeneratorConfig::load(config_path(&matches).as_deref())
        .unwrap_or_else(|e| handle_fatal(e));

    // Step 4: Dispatch; nothing reaches stdout unless the run succeeds
    tracing::debug!(command = matches.subcommand_name().unwrap_or("generate"), "Executing command");
    if let Err(e) = dispatch_command(&matches, config).await {
        handle_command_error(&e);
        std::process::exit(1);
    }
}
