//! The leveled logging capability.
//!
//! A [`Logger`] answers three calls:
//!
//! - [`Logger::is`]: would anything happen for this level?
//! - [`Logger::v`]: the logger to use for a message at this level.
//! - [`Logger::infof`]: emit a message through whatever `v` selected.
//!
//! Four variants exist and are picked at construction time or by `v`:
//!
//! | Variant | `is(l)` | `v(l)` | `infof` |
//! |---|---|---|---|
//! | discard | `false` | discard | nothing |
//! | global | gate(l) | gated wrapper with gate(l) captured | forwards |
//! | gated wrapper | gate(l), re-queried | global if gate(l), else discard | forwards if captured gate was open |
//! | file capture | `l <= threshold \|\| gate(l)` | discard / global / self | writes to the sink |
//!
//! Gating happens in `v`; `infof` on a file-capture logger writes whatever it
//! is given, newline-terminated. [`infof!`] decides on the newline from its
//! format string, plain `infof` from the rendered text. Always log through `v(level)`, and treat `is` as an advisory
//! pre-check before building expensive arguments. For the file-capture
//! logger `is` is a union of local and delegated handling, so `true` does not
//! mean the local sink will receive the message.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use buildlog::{Logger, infof};
//!
//! let sink = Arc::new(Mutex::new(Vec::new()));
//! let log = Logger::to_shared(sink.clone(), 0);
//!
//! assert!(log.is(0));
//! infof!(log.v(0), "x={}", 5);
//!
//! assert_eq!(sink.lock().unwrap().as_slice(), b"x=5\n");
//! ```

use std::fmt::{self, Display};
use std::io::Write;
use std::panic::Location;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use crate::backend::{self, Backend};

/// Verbosity level. Higher means more detailed and less important.
pub type Level = u8;

type SharedSink = Arc<Mutex<dyn Write + Send>>;

/// A logger that discards everything.
pub static NONE: Logger = Logger::none();

/// A logger that delegates to the process-wide default backend.
pub static LOG: LazyLock<Logger> = LazyLock::new(Logger::global);

/// Which variant a [`Logger`] value is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Drops every message.
    Discard,
    /// Forwards every message to the backend.
    Global,
    /// Forwards to the backend only if `enabled` was true when `v` was
    /// called.
    Gated {
        /// Gate state captured by `v`.
        enabled: bool,
    },
    /// Writes to a local sink; levels above `threshold` go to the backend.
    Local {
        /// Highest level captured locally.
        threshold: Level,
    },
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Discard => f.write_str("discard"),
            Route::Global => f.write_str("global"),
            Route::Gated { enabled: true } => f.write_str("gated (open)"),
            Route::Gated { enabled: false } => f.write_str("gated (closed)"),
            Route::Local { threshold } => write!(f, "local (threshold {threshold})"),
        }
    }
}

/// Leveled logging capability. Cheap to clone; clones share the backend and
/// the sink.
#[derive(Clone)]
pub struct Logger {
    kind: Kind,
}

#[derive(Clone)]
enum Kind {
    Discard,
    Global(Arc<dyn Backend>),
    Gated {
        backend: Arc<dyn Backend>,
        enabled: bool,
    },
    File {
        backend: Arc<dyn Backend>,
        sink: SharedSink,
        threshold: Level,
    },
}

impl Logger {
    /// A logger that does nothing.
    pub const fn none() -> Self {
        Self {
            kind: Kind::Discard,
        }
    }

    /// A logger that delegates to the process-wide default backend.
    pub fn global() -> Self {
        Self::with_backend(backend::global_dyn())
    }

    /// A logger that delegates to `backend`.
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            kind: Kind::Global(backend),
        }
    }

    /// Capture messages at `threshold` or below into `sink`, deferring higher
    /// levels to the process-wide default backend.
    pub fn to_file<W>(sink: W, threshold: Level) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::to_file_with_backend(backend::global_dyn(), sink, threshold)
    }

    /// Like [`Logger::to_file`], deferring to an explicit backend.
    pub fn to_file_with_backend<W>(backend: Arc<dyn Backend>, sink: W, threshold: Level) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::shared_with_backend(backend, Arc::new(Mutex::new(sink)), threshold)
    }

    /// Like [`Logger::to_file`], over a sink the caller keeps a handle to.
    pub fn to_shared<W>(sink: Arc<Mutex<W>>, threshold: Level) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::shared_with_backend(backend::global_dyn(), sink, threshold)
    }

    /// Like [`Logger::to_shared`], deferring to an explicit backend.
    pub fn shared_with_backend<W>(
        backend: Arc<dyn Backend>,
        sink: Arc<Mutex<W>>,
        threshold: Level,
    ) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            kind: Kind::File {
                backend,
                sink,
                threshold,
            },
        }
    }

    /// Whether a message at `level` would be handled by anything.
    pub fn is(&self, level: Level) -> bool {
        match &self.kind {
            Kind::Discard => false,
            Kind::Global(backend) | Kind::Gated { backend, .. } => backend.enabled(level),
            Kind::File {
                backend, threshold, ..
            } => level <= *threshold || backend.enabled(level),
        }
    }

    /// The logger to use for a message at `level`.
    pub fn v(&self, level: Level) -> Logger {
        match &self.kind {
            Kind::Discard => Self::none(),
            Kind::Global(backend) => Self {
                kind: Kind::Gated {
                    enabled: backend.enabled(level),
                    backend: backend.clone(),
                },
            },
            Kind::Gated { backend, .. } => {
                if backend.enabled(level) {
                    Self::with_backend(backend.clone())
                } else {
                    Self::none()
                }
            }
            Kind::File {
                backend, threshold, ..
            } => {
                // nothing fires for levels the backend rejects, local or not
                if !backend.enabled(level) {
                    Self::none()
                } else if level > *threshold {
                    Self::with_backend(backend.clone())
                } else {
                    self.clone()
                }
            }
        }
    }

    /// Emit `message`. A trailing newline is added to file output when the
    /// rendered message lacks one. Sink write errors are ignored.
    #[track_caller]
    pub fn infof(&self, message: impl Display) {
        self.dispatch(message, None);
    }

    /// Backs [`infof!`]: the newline check follows the format string, not
    /// the rendered text, so `infof!(log, "{}", "a\n")` writes `"a\n\n"`.
    #[doc(hidden)]
    #[track_caller]
    pub fn infof_fmt(&self, args: fmt::Arguments<'_>, format_has_newline: bool) {
        self.dispatch(args, Some(format_has_newline));
    }

    #[track_caller]
    fn dispatch(&self, message: impl Display, format_has_newline: Option<bool>) {
        match &self.kind {
            Kind::Discard | Kind::Gated { enabled: false, .. } => {}
            Kind::Global(backend) | Kind::Gated { backend, .. } => {
                backend.info(Location::caller(), &message.to_string());
            }
            Kind::File { sink, .. } => {
                let mut line = message.to_string();
                if !format_has_newline.unwrap_or_else(|| line.ends_with('\n')) {
                    line.push('\n');
                }
                let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
                let _ = sink.write_all(line.as_bytes());
            }
        }
    }

    /// Which variant this logger is.
    pub fn route(&self) -> Route {
        match &self.kind {
            Kind::Discard => Route::Discard,
            Kind::Global(_) => Route::Global,
            Kind::Gated { enabled, .. } => Route::Gated { enabled: *enabled },
            Kind::File { threshold, .. } => Route::Local {
                threshold: *threshold,
            },
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("route", &self.route())
            .finish()
    }
}

/// Format and emit through a [`Logger`], like `format!`.
///
/// File output gets a trailing newline unless the format string ends in
/// one; newlines produced by the arguments do not count.
///
/// ```
/// use buildlog::{NONE, infof};
///
/// infof!(NONE.v(3), "skipped {} files", 12);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $fmt:literal $($arg:tt)*) => {
        $logger.infof_fmt(
            ::std::format_args!($fmt $($arg)*),
            ($fmt).ends_with('\n'),
        )
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests;
