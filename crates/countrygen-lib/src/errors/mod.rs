use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid name for {code}: {name:?} contains control characters")]
    InvalidName { code: String, name: String },

    #[error("No country code for {0:?}")]
    NotFound(String),

    #[error("Command error: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, GenError>;

/// Logs a fatal error and exits the process with code 1.
///
/// Intended for unrecoverable errors during initialization, before any
/// command has produced output.
pub fn handle_fatal(err: GenError) -> ! {
    tracing::error!("Fatal error: {}", err);
    std::process::exit(1)
}

/// Maps a `GenError` to user-facing CLI output with actionable suggestions.
///
/// Everything goes to stderr so a redirected artifact is never polluted.
pub fn handle_command_error(err: &GenError) {
    use crate::output;

    match err {
        GenError::Http(e) => {
            output::error(&format!("Network error: {}", e));
            if e.is_timeout() {
                output::info("The request timed out. Retry, or raise it with `--timeout`.");
            } else {
                output::info("Check your internet connection.");
            }
        }
        GenError::Server { status, message } => {
            output::error(&format!("Server returned {}: {}", status, message));
            if *status == 429 {
                output::info("The API is rate limiting requests. Wait and try again.");
            }
        }
        GenError::Json(e) => {
            output::error(&format!("Malformed response: {}", e));
            output::info("The API response no longer matches the expected country shape.");
        }
        GenError::Io(e) => {
            output::error(&format!("File error: {}", e));
        }
        GenError::Config(msg) => {
            output::error(&format!("Configuration error: {}", msg));
        }
        GenError::InvalidName { .. } => {
            output::error(&format!("{}", err));
            output::info("Such a name cannot be emitted as a Rust string literal.");
        }
        GenError::Command(msg) => {
            output::error(&format!("Error: {}", msg));
        }
        _ => {
            output::error(&format!("{}", err));
        }
    }

    if crate::logger::is_verbose() {
        output::info(&format!("Details: {:?}", err));
    }
}
