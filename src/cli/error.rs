//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Configuration { .. } => crate::exitcode::CONFIG,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Execution { .. } => crate::exitcode::SOFTWARE,
                ApplicationError::OperationFailed { .. } => crate::exitcode::UNAVAILABLE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = CliError::from(ApplicationError::Configuration {
            input: "cwd".into(),
        });
        let failed = CliError::from(ApplicationError::Execution {
            command: "up".into(),
            exit_code: Some(1),
            stderr: String::new(),
        });
        let spawn = CliError::from(ApplicationError::OperationFailed {
            context: "run docker compose up in .".into(),
            source: Box::new(std::io::Error::from(std::io::ErrorKind::NotFound)),
        });

        assert_eq!(missing.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(failed.exit_code(), crate::exitcode::SOFTWARE);
        assert_eq!(spawn.exit_code(), crate::exitcode::UNAVAILABLE);
        assert_eq!(CliError::Usage("x".into()).exit_code(), crate::exitcode::USAGE);
    }
}
