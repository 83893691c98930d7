//! Error conversion helpers for external command I/O

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Name the command and the directory it ran in.
    ///
    /// # Example
    /// ```ignore
    /// runner.run_streaming("docker", &args, cwd, &mut sink)
    ///     .with_command_context("docker compose up", cwd)?;
    /// ```
    fn with_command_context(self, command: &str, cwd: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_command_context(self, command: &str, cwd: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("run {} in {}", command, cwd.display()),
            source: Box::new(e),
        })
    }
}
