//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, ScopedJoinHandle};

/// Source of named configuration inputs (CI-style key/value).
pub trait ConfigProvider: Send + Sync {
    /// Raw value of the input, untrimmed. `None` if not set.
    fn get(&self, name: &str) -> Option<String>;
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// Captured result of an external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` if terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run `cmd` with `args` in `cwd`, waiting for it to exit.
    ///
    /// Every output chunk (one line, stdout or stderr) is handed to
    /// `on_chunk` on the calling thread as it arrives.
    fn run_streaming(
        &self,
        cmd: &str,
        args: &[String],
        cwd: &Path,
        on_chunk: &mut dyn FnMut(&str),
    ) -> io::Result<CommandOutput>;
}

/// Line sink for the external tool's output.
pub trait DebugSink: Send + Sync {
    fn write(&self, line: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Reads inputs from environment variables, GitHub Actions style.
///
/// `compose-file` with prefix `INPUT_` is read from `INPUT_COMPOSE-FILE`.
#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    prefix: String,
}

impl EnvConfigProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for an input.
    pub fn variable_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.replace(' ', "_").to_uppercase())
    }
}

impl Default for EnvConfigProvider {
    fn default() -> Self {
        Self::new("INPUT_")
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(self.variable_name(name)).ok()
    }
}

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_streaming(
        &self,
        cmd: &str,
        args: &[String],
        cwd: &Path,
        on_chunk: &mut dyn FnMut(&str),
    ) -> io::Result<CommandOutput> {
        let mut child = Command::new(cmd)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "stdout not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "stderr not captured"))?;

        // Reap the child before surfacing a reader failure
        let drained = drain_streams(stdout, stderr, on_chunk);
        let status = child.wait()?;
        let mut captured = drained?;
        captured.exit_code = status.code();
        Ok(captured)
    }
}

/// Reads both pipes concurrently, forwarding lines in arrival order.
///
/// Returns the first read error from either stream once both readers have
/// finished.
fn drain_streams<O, E>(
    stdout: O,
    stderr: E,
    on_chunk: &mut dyn FnMut(&str),
) -> io::Result<CommandOutput>
where
    O: Read + Send,
    E: Read + Send,
{
    let mut captured = CommandOutput::default();
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        let tx_err = tx.clone();
        let out_reader = scope.spawn(move || forward_lines(stdout, Stream::Stdout, tx));
        let err_reader = scope.spawn(move || forward_lines(stderr, Stream::Stderr, tx_err));

        // Ends once both readers stop and drop their senders
        for (stream, chunk) in rx {
            on_chunk(&chunk);
            match stream {
                Stream::Stdout => captured.stdout.push_str(&chunk),
                Stream::Stderr => captured.stderr.push_str(&chunk),
            }
        }

        let out_result = join_reader(out_reader, Stream::Stdout);
        let err_result = join_reader(err_reader, Stream::Stderr);
        out_result.and(err_result)
    })?;

    Ok(captured)
}

fn join_reader(handle: ScopedJoinHandle<'_, io::Result<()>>, stream: Stream) -> io::Result<()> {
    handle.join().unwrap_or_else(|_| {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{stream:?} reader panicked"),
        ))
    })
}

fn forward_lines<R: Read>(
    reader: R,
    stream: Stream,
    tx: Sender<(Stream, String)>,
) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let chunk = String::from_utf8_lossy(&buf).into_owned();
        if tx.send((stream, chunk)).is_err() {
            return Ok(());
        }
    }
}

/// Forwards each line to `tracing` at DEBUG level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn write(&self, line: &str) {
        tracing::debug!(target: "docker", "{}", line);
    }
}
