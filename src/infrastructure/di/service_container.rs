//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{ComposeService, InputService, PostRunService};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::traits::{
    CommandRunner, ConfigProvider, DebugSink, EnvConfigProvider, FileSystem, RealCommandRunner,
    RealFileSystem, TracingSink,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Input source
    pub inputs: Arc<dyn ConfigProvider>,

    /// Receives the external tool's output lines
    pub sink: Arc<dyn DebugSink>,

    /// Settings file managed by `config path` / `config init`
    pub config_path: Option<PathBuf>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let inputs = Arc::new(EnvConfigProvider::new(settings.input_prefix.clone()));
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
            inputs,
            Arc::new(TracingSink),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        inputs: Arc<dyn ConfigProvider>,
        sink: Arc<dyn DebugSink>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            inputs,
            sink,
            config_path: global_config_path(),
        }
    }

    /// Point the `config` subcommands at a different settings file.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn input_service(&self) -> InputService {
        InputService::new(self.inputs.clone(), self.fs.clone())
    }

    pub fn compose_service(&self) -> ComposeService {
        ComposeService::new(self.cmd.clone(), self.sink.clone(), self.settings.clone())
    }

    pub fn post_run_service(&self) -> PostRunService {
        PostRunService::new(self.compose_service(), self.sink.clone())
    }
}
