//! # buildlog
//!
//! A leveled logging façade for build tooling: callers emit verbosity-gated
//! informational messages without knowing where they end up.
//!
//! ## Overview
//!
//! A [`Logger`] is one of four variants, chosen at construction or by
//! [`Logger::v`]:
//!
//! - **discard**: drops everything ([`NONE`], [`Logger::none`])
//! - **global**: delegates to a verbosity-gated [`Backend`](backend::Backend)
//!   ([`LOG`], [`Logger::global`], [`Logger::with_backend`])
//! - **gated**: what `v` on the global logger returns; remembers whether the
//!   gate was open
//! - **file capture**: writes messages at or below a threshold to a sink and
//!   defers higher levels to the backend ([`Logger::to_file`])
//!
//! Always log through `v(level)`:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use buildlog::backend::MemoryBackend;
//! use buildlog::{Logger, infof};
//!
//! let backend = MemoryBackend::new(3);
//! let sink = Arc::new(Mutex::new(Vec::new()));
//! let log = Logger::shared_with_backend(backend.clone(), sink.clone(), 1);
//!
//! infof!(log.v(1), "building {} crates", 4); // captured locally
//! infof!(log.v(3), "fingerprint for {}", "core"); // deferred to the backend
//! infof!(log.v(4), "never seen"); // gate closed
//!
//! assert_eq!(sink.lock().unwrap().as_slice(), b"building 4 crates\n");
//! assert_eq!(backend.messages(), vec!["fingerprint for core"]);
//! ```
//!
//! ## Architecture
//!
//! - [`logger`]: the capability and its variants
//! - [`backend`]: the global verbosity gate and output path, defaulting to
//!   `tracing`
//! - [`logging`]: installs the `tracing-subscriber` formatter
//! - [`cli`] and [`commands`]: the `buildlog` driver binary
//! - [`error`]: error types with thiserror + miette
//!
//! ## Error Handling
//!
//! The façade itself never returns errors; sink writes are best-effort. The
//! driver surfaces [`error::BuildLogError`] through `miette`.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod logging;

pub use logger::{LOG, Level, Logger, NONE, Route};
