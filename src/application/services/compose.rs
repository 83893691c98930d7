//! Docker compose dispatch service
//!
//! Builds the invocation for each subcommand and hands it to the
//! [`CommandRunner`]. Output lines are forwarded to the [`DebugSink`]
//! as they arrive. Failures are never retried.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{CommandOptions, CommonOptions, ComposeSubcommand, LogsOutput, ServiceSelection};
use crate::infrastructure::traits::{CommandOutput, CommandRunner, DebugSink};

/// Forwards up/down/push/logs to the external compose tool.
pub struct ComposeService {
    cmd: Arc<dyn CommandRunner>,
    sink: Arc<dyn DebugSink>,
    settings: Arc<Settings>,
}

impl ComposeService {
    pub fn new(
        cmd: Arc<dyn CommandRunner>,
        sink: Arc<dyn DebugSink>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            cmd,
            sink,
            settings,
        }
    }

    /// Bring up the named services, or all services if `services` is empty.
    #[instrument(skip(self, common))]
    pub fn up(
        &self,
        services: &[String],
        up_flags: &[String],
        common: CommonOptions<'_>,
    ) -> ApplicationResult<()> {
        let options = self.command_options(common, up_flags);
        let selection = ServiceSelection::from_services(services);
        match &selection {
            ServiceSelection::All => debug!("up: all services"),
            ServiceSelection::Named(names) => debug!("up: services={:?}", names),
        }
        self.execute(ComposeSubcommand::Up, &options, selection.as_args())?;
        Ok(())
    }

    /// Tear down all services.
    #[instrument(skip(self, common))]
    pub fn down(&self, down_flags: &[String], common: CommonOptions<'_>) -> ApplicationResult<()> {
        let options = self.command_options(common, down_flags);
        self.execute(ComposeSubcommand::Down, &options, &[])?;
        Ok(())
    }

    /// Push service images.
    #[instrument(skip(self, common))]
    pub fn push(&self, push_flags: &[String], common: CommonOptions<'_>) -> ApplicationResult<()> {
        let options = self.command_options(common, push_flags);
        self.execute(ComposeSubcommand::Push, &options, &[])?;
        Ok(())
    }

    /// Fetch logs without following.
    ///
    /// Stderr is returned alongside stdout rather than treated as failure;
    /// only a non-zero exit is an error.
    #[instrument(skip(self, common))]
    pub fn logs(&self, services: &[String], common: CommonOptions<'_>) -> ApplicationResult<LogsOutput> {
        let options = self.command_options(common, &[]);
        let output = self.execute(ComposeSubcommand::Logs, &options, services)?;
        Ok(LogsOutput {
            output: output.stdout,
            error: output.stderr,
        })
    }

    /// Shared option assembly for every subcommand.
    pub fn command_options(&self, common: CommonOptions<'_>, flags: &[String]) -> CommandOptions {
        CommandOptions::new(common, flags)
    }

    fn execute(
        &self,
        subcommand: ComposeSubcommand,
        options: &CommandOptions,
        services: &[String],
    ) -> ApplicationResult<CommandOutput> {
        let executable = self.settings.executable.as_str();
        let args = options.to_args(subcommand, services);
        debug!(
            "execute: cwd={}, {} {}",
            options.working_directory.display(),
            executable,
            args.join(" ")
        );

        let sink = &self.sink;
        let mut forward = |chunk: &str| {
            sink.write(chunk.trim_end_matches(|c: char| c == '\r' || c == '\n'));
        };

        let output = self
            .cmd
            .run_streaming(executable, &args, &options.working_directory, &mut forward)
            .with_command_context(
                &format!("{} compose {}", executable, subcommand),
                &options.working_directory,
            )?;

        if !output.success() {
            return Err(ApplicationError::Execution {
                command: subcommand.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim_end().to_string(),
            });
        }

        debug!("execute: {} finished", subcommand);
        Ok(output)
    }
}
