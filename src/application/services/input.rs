//! Input resolution service
//!
//! Reads raw inputs from a [`ConfigProvider`], validates compose files
//! against the working directory and tokenizes flag strings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{has_empty_tokens, parse_flags, split_lines, ResolvedInputs, ValidationWarning};
use crate::infrastructure::traits::{ConfigProvider, FileSystem};

/// Named inputs understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputName {
    ComposeFile,
    Services,
    ComposeFlags,
    UpFlags,
    DownFlags,
    PushFlags,
    DockerFlags,
    Cwd,
}

impl InputName {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputName::ComposeFile => "compose-file",
            InputName::Services => "services",
            InputName::ComposeFlags => "compose-flags",
            InputName::UpFlags => "up-flags",
            InputName::DownFlags => "down-flags",
            InputName::PushFlags => "push-flags",
            InputName::DockerFlags => "docker-flags",
            InputName::Cwd => "cwd",
        }
    }
}

/// Resolves [`ResolvedInputs`] from the configured input source.
pub struct InputService {
    provider: Arc<dyn ConfigProvider>,
    fs: Arc<dyn FileSystem>,
}

impl InputService {
    pub fn new(provider: Arc<dyn ConfigProvider>, fs: Arc<dyn FileSystem>) -> Self {
        Self { provider, fs }
    }

    /// Resolve all inputs.
    ///
    /// Fails only if `cwd` is missing. Compose files that do not exist under
    /// the working directory are dropped with a warning.
    pub fn resolve(&self) -> ApplicationResult<ResolvedInputs> {
        let working_directory = self.working_directory()?;
        debug!("resolve: cwd={}", working_directory.display());

        let (compose_files, warnings) = self.validate_compose_files(
            &working_directory,
            self.multiline_input(InputName::ComposeFile),
        );
        for warning in &warnings {
            warn!("{}", warning);
        }

        let inputs = ResolvedInputs {
            compose_files,
            services: self.multiline_input(InputName::Services),
            compose_flags: self.flags(InputName::ComposeFlags),
            up_flags: self.flags(InputName::UpFlags),
            down_flags: self.flags(InputName::DownFlags),
            push_flags: self.flags(InputName::PushFlags),
            docker_flags: self.flags(InputName::DockerFlags),
            working_directory,
        };
        debug!("resolve: {:?}", inputs);
        Ok(inputs)
    }

    /// Keep files that exist relative to `cwd`, in order.
    ///
    /// Absolute paths are checked as given, not nested under `cwd`.
    pub fn validate_compose_files(
        &self,
        cwd: &Path,
        files: Vec<String>,
    ) -> (Vec<String>, Vec<ValidationWarning>) {
        let mut kept = Vec::with_capacity(files.len());
        let mut warnings = Vec::new();

        for file in files {
            if file.is_empty() {
                continue;
            }
            if self.fs.exists(&cwd.join(&file)) {
                kept.push(file);
            } else {
                warnings.push(ValidationWarning {
                    file,
                    working_directory: cwd.to_path_buf(),
                });
            }
        }

        (kept, warnings)
    }

    fn working_directory(&self) -> ApplicationResult<PathBuf> {
        self.input(InputName::Cwd)
            .map(PathBuf::from)
            .ok_or_else(|| ApplicationError::Configuration {
                input: InputName::Cwd.as_str().to_string(),
            })
    }

    /// Single-line input, trimmed; blank counts as absent.
    fn input(&self, name: InputName) -> Option<String> {
        self.provider
            .get(name.as_str())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn multiline_input(&self, name: InputName) -> Vec<String> {
        self.provider
            .get(name.as_str())
            .map(|value| split_lines(&value))
            .unwrap_or_default()
    }

    fn flags(&self, name: InputName) -> Vec<String> {
        let tokens = parse_flags(self.input(name).as_deref());
        if has_empty_tokens(&tokens) {
            warn!(
                "{} contains repeated spaces, passing empty arguments: {:?}",
                name.as_str(),
                tokens
            );
        }
        tokens
    }
}
