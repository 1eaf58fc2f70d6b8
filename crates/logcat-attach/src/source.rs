//! Log sources the collector can read from.
//!
//! [`CommandSource`] spawns the platform log reader. The child process lives
//! inside the returned [`ProcessStream`] and is killed and reaped when the
//! stream is dropped, whichever way collection ends.

use std::io::{self, BufRead, BufReader, Read};
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::{debug, trace};

use crate::config::CollectorConfig;
use crate::error::{CollectError, CollectResult};

/// Something that can produce a stream of log lines.
///
/// Implemented by [`CommandSource`] and by any `Fn() -> io::Result<R>`
/// closure returning a buffered reader.
pub trait LogSource: Send + Sync {
    /// Reader over the log text.
    type Stream: BufRead;

    /// Acquire a fresh stream. Every call is independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be opened.
    fn open(&self) -> CollectResult<Self::Stream>;
}

impl<F, R> LogSource for F
where
    F: Fn() -> io::Result<R> + Send + Sync,
    R: BufRead,
{
    type Stream = R;

    fn open(&self) -> CollectResult<R> {
        self().map_err(CollectError::Read)
    }
}

/// Runs an external program and reads its stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl Default for CommandSource {
    fn default() -> Self {
        Self::from_config(&CollectorConfig::default())
    }
}

impl CommandSource {
    /// Create a source for `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Create a source from the program and arguments in `config`.
    #[must_use]
    pub fn from_config(config: &CollectorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    /// Append an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The program this source runs.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed to the program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl LogSource for CommandSource {
    type Stream = ProcessStream;

    fn open(&self) -> CollectResult<ProcessStream> {
        debug!(program = %self.program, args = ?self.args, "Spawning log reader");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| CollectError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let Some(stdout) = child.stdout.take() else {
            release(&mut child, &self.program);
            return Err(CollectError::MissingStdout);
        };

        Ok(ProcessStream {
            reader: BufReader::new(stdout),
            child,
            program: self.program.clone(),
        })
    }
}

/// Buffered stdout of a running log reader.
///
/// Owns the child; dropping the stream terminates it.
#[derive(Debug)]
pub struct ProcessStream {
    reader: BufReader<ChildStdout>,
    child: Child,
    program: String,
}

impl ProcessStream {
    /// OS process id of the log reader.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

impl Read for ProcessStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for ProcessStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt);
    }
}

impl Drop for ProcessStream {
    fn drop(&mut self) {
        release(&mut self.child, &self.program);
    }
}

/// Kill the child if it is still running, then reap it.
fn release(child: &mut Child, program: &str) {
    let pid = child.id();
    match child.try_wait() {
        Ok(Some(status)) => {
            trace!(program, pid, %status, "Log reader already exited");
            return;
        },
        Ok(None) => {},
        Err(e) => trace!(program, pid, error = %e, "Failed to poll log reader"),
    }

    if let Err(e) = child.kill() {
        trace!(program, pid, error = %e, "Failed to kill log reader");
    }
    match child.wait() {
        Ok(status) => debug!(program, pid, %status, "Log reader released"),
        Err(e) => debug!(program, pid, error = %e, "Failed to reap log reader"),
    }
}
