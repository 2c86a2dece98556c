//! Implementation of the buildlog driver commands.
//!
//! `mod.rs` configures the backend, builds the logger from the global options
//! and dispatches; command logic lives in `emit` and `probe`.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use crate::backend::{self, Backend};
use crate::cli::{Cli, Commands, GlobalOpts};
use crate::error::{BuildLogError, Result};
use crate::logger::Logger;

pub(crate) mod emit;
pub(crate) mod probe;

pub use emit::emit;
pub use probe::{Probe, probe};


/// Execute commands based on the parsed CLI arguments.
///
/// Sets the process-wide backend's verbosity from the global options, then
/// runs against stdin and stdout.
pub fn execute(cli: &Cli) -> Result<()> {
    backend::global().set_verbosity(cli.global_opts().effective_verbosity());

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with(cli, backend::global().clone(), stdin.lock(), stdout.lock())
}

/// Execute commands against an explicit backend and explicit streams.
///
/// The backend is used as configured; its verbosity is not touched.
pub fn execute_with<R, W>(
    cli: &Cli,
    backend: Arc<dyn Backend>,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let logger = build_logger(cli.global_opts(), backend)?;
    tracing::debug!(
        route = %logger.route(),
        verbosity = cli.global_opts().effective_verbosity(),
        "logger ready"
    );

    match cli.command() {
        Commands::Emit { level, messages } => {
            let count = emit(&logger, *level, messages, input)?;
            tracing::debug!(count, level = *level, "emit finished");
            Ok(())
        }
        Commands::Probe { level } => {
            let report = probe(&logger, *level);
            write!(output, "{report}").map_err(|source| BuildLogError::IoError {
                stream: "stdout",
                source,
            })
        }
    }
}

/// Build the logger the global options describe: file capture when a capture
/// path is set, otherwise the global delegate.
pub fn build_logger(opts: &GlobalOpts, backend: Arc<dyn Backend>) -> Result<Logger> {
    match opts.capture() {
        Some(path) => {
            let file = open_capture(path, opts.append())?;
            Ok(Logger::to_file_with_backend(
                backend,
                file,
                opts.threshold(),
            ))
        }
        None => Ok(Logger::with_backend(backend)),
    }
}

fn open_capture(path: &Path, append: bool) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|source| BuildLogError::CaptureOpenError {
            path: path.to_path_buf(),
            source,
        })
}
