//! Command dispatch: maps parsed CLI commands onto services.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Whether the command reads the loaded settings.
///
/// Completion and `config path`/`config init` must keep working when the
/// settings file itself is broken.
pub fn needs_settings(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Completion { .. }
            | Commands::Config {
                command: ConfigCommands::Path | ConfigCommands::Init { .. }
            }
    )
}

/// Execute a parsed command against the given services.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Commands::Up => cmd_up(container),
        Commands::Down => cmd_down(container),
        Commands::Push => cmd_push(container),
        Commands::Logs => cmd_logs(container),
        Commands::Post => cmd_post(container),
        Commands::Config { command } => cmd_config(command, container),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "compose-action", &mut io::stdout());
            Ok(())
        }
    }
}

#[instrument(skip_all)]
fn cmd_up(container: &ServiceContainer) -> CliResult<()> {
    let inputs = container.input_service().resolve()?;
    container
        .compose_service()
        .up(&inputs.services, &inputs.up_flags, inputs.common())?;
    output::success("docker compose up");
    Ok(())
}

#[instrument(skip_all)]
fn cmd_down(container: &ServiceContainer) -> CliResult<()> {
    let inputs = container.input_service().resolve()?;
    container
        .compose_service()
        .down(&inputs.down_flags, inputs.common())?;
    output::success("docker compose down");
    Ok(())
}

#[instrument(skip_all)]
fn cmd_push(container: &ServiceContainer) -> CliResult<()> {
    let inputs = container.input_service().resolve()?;
    container
        .compose_service()
        .push(&inputs.push_flags, inputs.common())?;
    output::success("docker compose push");
    Ok(())
}

#[instrument(skip_all)]
fn cmd_logs(container: &ServiceContainer) -> CliResult<()> {
    let inputs = container.input_service().resolve()?;
    let logs = container
        .compose_service()
        .logs(&inputs.services, inputs.common())?;
    if !logs.error.is_empty() {
        debug!("docker compose logs stderr:\n{}", logs.error);
    }
    output::info(&logs.output);
    Ok(())
}

#[instrument(skip_all)]
fn cmd_post(container: &ServiceContainer) -> CliResult<()> {
    let inputs = container.input_service().resolve()?;
    let logs = container.post_run_service().run(&inputs)?;
    output::header("docker compose logs:");
    output::info(&logs.output);
    output::success("docker compose down");
    Ok(())
}

fn cmd_config(command: &ConfigCommands, container: &ServiceContainer) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            output::info(&config_path(container)?.display());
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = config_path(container)?;
            if container.fs.exists(path) && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(path)
                .and_then(|_| container.fs.write(path, &Settings::template()))
                .map_err(|e| ApplicationError::OperationFailed {
                    context: format!("write config {}", path.display()),
                    source: Box::new(e),
                })?;
            output::action("Created", &path.display());
            Ok(())
        }
    }
}

fn config_path(container: &ServiceContainer) -> CliResult<&Path> {
    container
        .config_path
        .as_deref()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))
}
