use thiserror::Error;

/// Errors surfaced by command-line operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when an argument does not match the expected format, such
    /// as an unknown gesture or a malformed value.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the configuration system.
    ///
    /// This wraps errors from the config store, such as invalid paths,
    /// type mismatches, failed validation, or file system issues.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Output could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(String),
}

/// Result type for CLI command execution.
///
/// Commands return either their formatted output as a String or a
/// CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;
