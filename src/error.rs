use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file. Original error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Cannot proceed: no theme path configured in '{config_file}'. Run `acfgen setup` first.")]
    MissingConfiguration { config_file: String },

    #[error("'{input}' is not one of the offered choices: {choices}.")]
    InvalidSelection { input: String, choices: String },
}

/// Convenience type alias for Results with this crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
