//! Domain entities: core data structures

use std::fmt;
use std::path::{Path, PathBuf};

/// Inputs resolved once per invocation.
///
/// Built by the input service, then only read. Every entry of `compose_files`
/// existed under `working_directory` when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedInputs {
    /// Compose files, in input order
    pub compose_files: Vec<String>,
    /// Target services (empty = all services)
    pub services: Vec<String>,
    /// Flags placed between `compose` and the subcommand
    pub compose_flags: Vec<String>,
    pub up_flags: Vec<String>,
    pub down_flags: Vec<String>,
    pub push_flags: Vec<String>,
    /// Flags placed before `compose` (e.g. `--context remote`)
    pub docker_flags: Vec<String>,
    /// Directory the external tool runs in
    pub working_directory: PathBuf,
}

impl ResolvedInputs {
    /// Borrow the options shared by every subcommand.
    pub fn common(&self) -> CommonOptions<'_> {
        CommonOptions {
            working_directory: &self.working_directory,
            compose_files: &self.compose_files,
            compose_flags: &self.compose_flags,
            docker_flags: &self.docker_flags,
        }
    }
}

/// Options shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonOptions<'a> {
    pub working_directory: &'a Path,
    pub compose_files: &'a [String],
    pub compose_flags: &'a [String],
    pub docker_flags: &'a [String],
}

/// Compose subcommands forwarded to the external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeSubcommand {
    Up,
    Down,
    Push,
    Logs,
}

impl ComposeSubcommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComposeSubcommand::Up => "up",
            ComposeSubcommand::Down => "down",
            ComposeSubcommand::Push => "push",
            ComposeSubcommand::Logs => "logs",
        }
    }
}

impl fmt::Display for ComposeSubcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which services an `up` targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSelection {
    /// Every service declared in the compose files
    All,
    /// Only the named services, in order
    Named(Vec<String>),
}

impl ServiceSelection {
    /// An empty list selects all services.
    pub fn from_services(services: &[String]) -> Self {
        if services.is_empty() {
            ServiceSelection::All
        } else {
            ServiceSelection::Named(services.to_vec())
        }
    }

    /// Positional arguments appended after the subcommand flags.
    pub fn as_args(&self) -> &[String] {
        match self {
            ServiceSelection::All => &[],
            ServiceSelection::Named(names) => names,
        }
    }
}

/// Per-subcommand invocation shape. Built fresh for each dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    pub working_directory: PathBuf,
    pub compose_files: Vec<String>,
    pub compose_flags: Vec<String>,
    pub docker_flags: Vec<String>,
    /// Flags placed right after the subcommand
    pub command_flags: Vec<String>,
}

impl CommandOptions {
    /// Combine the shared options with a subcommand's own flags.
    pub fn new(common: CommonOptions<'_>, command_flags: &[String]) -> Self {
        Self {
            working_directory: common.working_directory.to_path_buf(),
            compose_files: common.compose_files.to_vec(),
            compose_flags: common.compose_flags.to_vec(),
            docker_flags: common.docker_flags.to_vec(),
            command_flags: command_flags.to_vec(),
        }
    }

    /// Argument vector for the external executable.
    ///
    /// Layout: `[docker flags] compose [-f file]... [compose flags] <subcommand>
    /// [command flags] [services]`.
    pub fn to_args(&self, subcommand: ComposeSubcommand, services: &[String]) -> Vec<String> {
        let mut args = Vec::with_capacity(
            self.docker_flags.len()
                + 2 * self.compose_files.len()
                + self.compose_flags.len()
                + self.command_flags.len()
                + services.len()
                + 2,
        );
        args.extend(self.docker_flags.iter().cloned());
        args.push("compose".to_string());
        for file in &self.compose_files {
            args.push("-f".to_string());
            args.push(file.clone());
        }
        args.extend(self.compose_flags.iter().cloned());
        args.push(subcommand.as_str().to_string());
        args.extend(self.command_flags.iter().cloned());
        args.extend(services.iter().cloned());
        args
    }
}

/// Captured output of a log fetch. Stderr is data here, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogsOutput {
    pub output: String,
    pub error: String,
}

/// A compose file that was dropped because it does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub file: String,
    pub working_directory: PathBuf,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} does not exist in {}",
            self.file,
            self.working_directory.display()
        )
    }
}
