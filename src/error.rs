//! Error types for buildlog.
//!
//! The logging façade itself never fails: sink writes are best-effort and
//! gate queries are infallible. Errors only arise around it, in the driver
//! binary and when installing the tracing subscriber. They are defined with
//! `thiserror` and carry `miette` diagnostics for CLI output.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use buildlog::error::{BuildLogError, Result};
//!
//! fn check_capture(path: &Path) -> Result<()> {
//!     if path.is_dir() {
//!         return Err(BuildLogError::ConfigError(format!(
//!             "capture path '{}' is a directory",
//!             path.display()
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in buildlog operations
#[derive(Error, Debug, Diagnostic)]
pub enum BuildLogError {
    /// Failed to open or create the capture file.
    ///
    /// Raised when `--capture` points somewhere that cannot be opened for
    /// writing: a missing parent directory, insufficient permissions, or a
    /// directory instead of a file.
    #[error("Failed to open capture file '{path}'")]
    #[diagnostic(
        code(buildlog::capture::open_error),
        help("Ensure the parent directory exists and is writable.")
    )]
    CaptureOpenError {
        /// The capture path that could not be opened
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading messages or writing command output.
    #[error("I/O error on {stream}")]
    #[diagnostic(code(buildlog::io_error))]
    IoError {
        /// The stream that failed ("stdin" or "stdout")
        stream: &'static str,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed.
    ///
    /// Usually means a global subscriber was already set by the embedding
    /// program.
    #[error("Failed to install tracing subscriber: {0}")]
    #[diagnostic(
        code(buildlog::logging::init_error),
        help("Only one global tracing subscriber may be installed per process.")
    )]
    SubscriberInit(
        /// Description of the failure
        String,
    ),

    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(buildlog::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError(
        /// Description of the configuration error
        String,
    ),
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, BuildLogError>;
