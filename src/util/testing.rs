//! Shared test setup and test doubles for the I/O boundary traits.

use std::collections::{BTreeMap, VecDeque};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::{CommandOutput, CommandRunner, ConfigProvider, DebugSink};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "compose_action=trace,docker=trace");
        }
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Inputs from a fixed map.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    values: BTreeMap<String, String>,
}

impl StaticConfigProvider {
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Records every line written to it.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl DebugSink for RecordingSink {
    fn write(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// One call seen by [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub cmd: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Scripted reply: chunks streamed in order, then the final output.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReply {
    pub chunks: Vec<String>,
    pub output: CommandOutput,
}

impl ScriptedReply {
    /// Successful run printing `stdout` and `stderr`, each as one chunk.
    pub fn ok(stdout: &str, stderr: &str) -> Self {
        Self::exit(0, stdout, stderr)
    }

    pub fn exit(code: i32, stdout: &str, stderr: &str) -> Self {
        let chunks = [stdout, stderr]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            chunks,
            output: CommandOutput {
                exit_code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        }
    }
}

/// Command runner that records invocations and replays scripted replies.
///
/// With no replies left it answers with a successful, silent run.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    replies: Mutex<VecDeque<io::Result<ScriptedReply>>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: ScriptedReply) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Ok(reply));
        }
        self
    }

    /// Next call fails to spawn with `kind`.
    pub fn with_spawn_error(self, kind: io::ErrorKind) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Err(io::Error::from(kind)));
        }
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .map(|i| i.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run_streaming(
        &self,
        cmd: &str,
        args: &[String],
        cwd: &Path,
        on_chunk: &mut dyn FnMut(&str),
    ) -> io::Result<CommandOutput> {
        if let Ok(mut invocations) = self.invocations.lock() {
            invocations.push(Invocation {
                cmd: cmd.to_string(),
                args: args.to_vec(),
                cwd: cwd.to_path_buf(),
            });
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(|| Ok(ScriptedReply::ok("", "")))?;

        for chunk in &reply.chunks {
            on_chunk(chunk);
        }
        Ok(reply.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn given_no_replies_when_running_then_succeeds_silently() {
        let runner = ScriptedRunner::new();
        let mut seen = Vec::new();

        let out = runner
            .run_streaming("docker", &[], Path::new("."), &mut |c: &str| seen.push(c.to_string()))
            .unwrap();

        assert!(out.success());
        assert!(seen.is_empty());
        assert_eq!(runner.invocations().len(), 1);
    }
}
