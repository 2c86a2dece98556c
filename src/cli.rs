//! Command-line interface definitions for the buildlog driver.
//!
//! The driver configures the process-wide backend from the global options and
//! then either emits messages through a [`Logger`](crate::Logger) or reports
//! how a level would be routed. The main entry point is the [`Cli`] struct.
//!
//! # Example
//!
//! ```no_run
//! use buildlog::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//!
//! match cli.command() {
//!     Commands::Emit { level, .. } => println!("emitting at level {level}"),
//!     Commands::Probe { level } => println!("probing level {level}"),
//! }
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{BuildLogError, Result};
use crate::logger::Level;

/// Main command-line interface for buildlog.
#[derive(Debug, Parser)]
#[command(
    name = "buildlog",
    bin_name = "buildlog",
    version,
    about = "Leveled build logging: capture low-verbosity output to a file, defer the rest",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Global options that apply to all buildlog commands.
///
/// These configure the global verbosity gate and, optionally, a capture file
/// that receives every message at or below the threshold.
#[derive(Debug, Parser)]
pub struct GlobalOpts {
    /// Raise the global verbosity (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "BUILDLOG_VERBOSE")]
    verbose: u8,

    /// Set the global verbosity explicitly (the higher of this and -v wins)
    #[arg(long, global = true, env = "BUILDLOG_VERBOSITY")]
    verbosity: Option<Level>,

    /// Silence all delegated output; the capture file is still written
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "BUILDLOG_QUIET"
    )]
    quiet: bool,

    /// Capture messages at or below --threshold into this file
    #[arg(long, global = true, env = "BUILDLOG_CAPTURE")]
    capture: Option<PathBuf>,

    /// Highest level written to the capture file
    #[arg(long, global = true, default_value = "0", env = "BUILDLOG_THRESHOLD")]
    threshold: Level,

    /// Append to the capture file instead of truncating it
    #[arg(long, global = true, requires = "capture")]
    append: bool,
}

impl GlobalOpts {
    /// Create a new builder for constructing `GlobalOpts` programmatically.
    pub fn builder() -> GlobalOptsBuilder {
        GlobalOptsBuilder::default()
    }

    /// Verbosity to configure the backend with.
    ///
    /// Quiet mode forces 0; otherwise the higher of `--verbosity` and the
    /// `-v` count.
    pub fn effective_verbosity(&self) -> Level {
        if self.quiet {
            return 0;
        }
        self.verbosity.unwrap_or(0).max(self.verbose)
    }

    /// Get the `-v` count
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Get the explicit verbosity, if any
    pub fn verbosity(&self) -> Option<Level> {
        self.verbosity
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Get the capture file path
    pub fn capture(&self) -> Option<&Path> {
        self.capture.as_deref()
    }

    /// Get the capture threshold
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Check if the capture file is appended to
    pub fn append(&self) -> bool {
        self.append
    }
}

/// Builder for constructing `GlobalOpts` programmatically.
#[derive(Debug, Default)]
pub struct GlobalOptsBuilder {
    verbose: u8,
    verbosity: Option<Level>,
    quiet: bool,
    capture: Option<PathBuf>,
    threshold: Level,
    append: bool,
}

impl GlobalOptsBuilder {
    /// Set the `-v` count.
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Set the explicit verbosity.
    pub fn verbosity(mut self, level: Option<Level>) -> Self {
        self.verbosity = level;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set the capture file path.
    pub fn capture(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.capture = path.map(|p| p.into());
        self
    }

    /// Set the capture threshold.
    pub fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Append to the capture file instead of truncating it.
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Build the `GlobalOpts` instance with the configured values.
    pub fn build(self) -> GlobalOpts {
        GlobalOpts {
            verbose: self.verbose,
            verbosity: self.verbosity,
            quiet: self.quiet,
            capture: self.capture,
            threshold: self.threshold,
            append: self.append,
        }
    }
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Parse command line arguments from the process environment
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    global_opts: GlobalOptsBuilder,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Set the `-v` count
    pub fn verbose(mut self, level: u8) -> Self {
        self.global_opts = self.global_opts.verbose(level);
        self
    }

    /// Set the explicit verbosity
    pub fn verbosity(mut self, level: Level) -> Self {
        self.global_opts = self.global_opts.verbosity(Some(level));
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.global_opts = self.global_opts.quiet(enabled);
        self
    }

    /// Set the capture file path
    pub fn capture(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_opts = self.global_opts.capture(Some(path));
        self
    }

    /// Set the capture threshold
    pub fn threshold(mut self, threshold: Level) -> Self {
        self.global_opts = self.global_opts.threshold(threshold);
        self
    }

    /// Append to the capture file
    pub fn append(mut self, append: bool) -> Self {
        self.global_opts = self.global_opts.append(append);
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        let command = self
            .command
            .ok_or_else(|| BuildLogError::ConfigError("Command is required".to_string()))?;

        let global_opts = self.global_opts.build();
        if global_opts.append && global_opts.capture.is_none() {
            return Err(BuildLogError::ConfigError(
                "--append requires --capture".to_string(),
            ));
        }

        Ok(Cli {
            global_opts,
            command,
        })
    }
}

/// Available buildlog subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Emit messages at a verbosity level
    ///
    /// Each message goes through `v(level)`: captured locally when the level
    /// is at or below the threshold, handed to the global subsystem when it is
    /// above, and dropped when the global gate is closed. Without messages,
    /// every line of stdin is emitted.
    Emit {
        /// Verbosity level of the messages
        #[arg(short, long, default_value = "0")]
        level: Level,

        /// Messages to emit (reads stdin lines when omitted)
        messages: Vec<String>,
    },

    /// Report how a level would be routed without emitting anything
    Probe {
        /// Verbosity level to probe
        #[arg(short, long, default_value = "0")]
        level: Level,
    },
}
