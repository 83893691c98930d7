//! Application-level errors

use thiserror::Error;

/// Application errors: configuration, execution and I/O failures.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("input required and not supplied: {input}")]
    Configuration { input: String },

    #[error("docker compose {command} failed ({}): {stderr}", describe_exit(.exit_code))]
    Execution {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_execution_error_when_displayed_then_includes_stderr() {
        let err = ApplicationError::Execution {
            command: "up".into(),
            exit_code: Some(1),
            stderr: "no such service: cache".into(),
        };
        assert_eq!(
            err.to_string(),
            "docker compose up failed (exit code 1): no such service: cache"
        );
    }

    #[test]
    fn given_signal_when_displayed_then_says_so() {
        let err = ApplicationError::Execution {
            command: "down".into(),
            exit_code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
