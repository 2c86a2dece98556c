//! The global verbosity-gated logging subsystem.
//!
//! A [`Backend`] answers one question ("is verbosity `level` enabled?") and
//! owns one output path (an info-level message attributed to a caller
//! location). Loggers hold an `Arc<dyn Backend>` instead of reaching for
//! ambient state, so tests and embedders can inject their own.
//!
//! [`TracingBackend`] is the default: it keeps the configured verbosity in an
//! atomic and emits through [`tracing`]. The process-wide instance is
//! returned by [`global`]; it starts at verbosity 0 and is never configured
//! implicitly. [`MemoryBackend`] records messages instead, for tests.
//!
//! # Example
//!
//! ```
//! use buildlog::backend::{self, Backend};
//!
//! backend::global().set_verbosity(2);
//! assert!(backend::global().enabled(2));
//! assert!(!backend::global().enabled(3));
//! ```

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use crate::logger::Level;

/// Tracing target used for every event the default backend emits.
pub const TARGET: &str = "buildlog";

/// A verbosity gate paired with an info-level output path.
pub trait Backend: Send + Sync + fmt::Debug {
    /// Whether logging at `level` is currently enabled.
    fn enabled(&self, level: Level) -> bool;

    /// Emit an already formatted message, attributed to `caller`.
    fn info(&self, caller: &'static Location<'static>, message: &str);
}

/// Backend that gates on an atomic verbosity and emits `tracing` events.
#[derive(Debug, Default)]
pub struct TracingBackend {
    verbosity: AtomicU8,
}

impl TracingBackend {
    /// Create a backend with the given verbosity.
    pub const fn new(verbosity: Level) -> Self {
        Self {
            verbosity: AtomicU8::new(verbosity),
        }
    }

    /// The configured verbosity.
    pub fn verbosity(&self) -> Level {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Replace the configured verbosity. Takes effect for every logger that
    /// queries this backend afterwards, including verbosity-gated wrappers
    /// re-querying on `v`.
    pub fn set_verbosity(&self, verbosity: Level) {
        self.verbosity.store(verbosity, Ordering::Relaxed);
    }
}

impl Backend for TracingBackend {
    fn enabled(&self, level: Level) -> bool {
        self.verbosity() >= level
    }

    fn info(&self, caller: &'static Location<'static>, message: &str) {
        tracing::info!(
            target: TARGET,
            caller_file = caller.file(),
            caller_line = caller.line(),
            "{message}"
        );
    }
}

/// A message received by a [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Source file of the original call site.
    pub file: &'static str,
    /// Line of the original call site.
    pub line: u32,
    /// The formatted message.
    pub message: String,
}

/// Backend that keeps messages in memory instead of emitting them.
///
/// Useful for asserting on what code under test logged through the global
/// path.
///
/// ```
/// use buildlog::Logger;
/// use buildlog::backend::MemoryBackend;
///
/// let backend = MemoryBackend::new(1);
/// let log = Logger::with_backend(backend.clone());
///
/// log.v(1).infof("kept");
/// log.v(2).infof("dropped");
///
/// assert_eq!(backend.messages(), vec!["kept"]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    verbosity: AtomicU8,
    records: Mutex<Vec<Record>>,
}

impl MemoryBackend {
    /// Create a shared backend with the given verbosity.
    pub fn new(verbosity: Level) -> Arc<Self> {
        Arc::new(Self {
            verbosity: AtomicU8::new(verbosity),
            records: Mutex::default(),
        })
    }

    /// Replace the configured verbosity.
    pub fn set_verbosity(&self, verbosity: Level) {
        self.verbosity.store(verbosity, Ordering::Relaxed);
    }

    /// A copy of every record received so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// The messages received so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    /// Remove and return every record received so far.
    pub fn drain(&self) -> Vec<Record> {
        self.lock().drain(..).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Backend for MemoryBackend {
    fn enabled(&self, level: Level) -> bool {
        self.verbosity.load(Ordering::Relaxed) >= level
    }

    fn info(&self, caller: &'static Location<'static>, message: &str) {
        self.lock().push(Record {
            file: caller.file(),
            line: caller.line(),
            message: message.to_string(),
        });
    }
}

static GLOBAL: LazyLock<Arc<TracingBackend>> =
    LazyLock::new(|| Arc::new(TracingBackend::default()));

/// The process-wide default backend.
pub fn global() -> &'static Arc<TracingBackend> {
    &GLOBAL
}

/// The process-wide default backend, erased to a trait object.
pub(crate) fn global_dyn() -> Arc<dyn Backend> {
    GLOBAL.clone()
}
