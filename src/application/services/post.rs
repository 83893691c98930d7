//! Post-run step: collect logs, then tear the project down.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::services::ComposeService;
use crate::application::ApplicationResult;
use crate::domain::{LogsOutput, ResolvedInputs};
use crate::infrastructure::traits::DebugSink;

/// Runs after the main step of a CI job.
pub struct PostRunService {
    compose: ComposeService,
    sink: Arc<dyn DebugSink>,
}

impl PostRunService {
    pub fn new(compose: ComposeService, sink: Arc<dyn DebugSink>) -> Self {
        Self { compose, sink }
    }

    /// Fetch logs for the configured services, then `down`.
    ///
    /// Returns the captured logs. Stderr from the log fetch goes to the
    /// debug sink; it does not stop the teardown.
    #[instrument(skip_all)]
    pub fn run(&self, inputs: &ResolvedInputs) -> ApplicationResult<LogsOutput> {
        let logs = self.compose.logs(&inputs.services, inputs.common())?;
        if !logs.error.is_empty() {
            self.sink
                .write(&format!("docker compose error:\n{}", logs.error.trim_end()));
        }

        debug!("run: tearing down");
        self.compose.down(&inputs.down_flags, inputs.common())?;
        Ok(logs)
    }
}
