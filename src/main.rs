//! # buildlog CLI
//!
//! Emits leveled messages from shell scripts and build steps, capturing
//! low-verbosity output to a file and deferring the rest to stderr.
//!
//! ## Commands
//!
//! - **emit**: send messages (or stdin lines) through `v(level)`
//! - **probe**: show how a level would be routed
//!
//! ## Quick Start
//!
//! ```bash
//! # Keep levels 0-1 in build.log, show up to level 3 on stderr
//! buildlog -vvv --capture build.log --threshold 1 emit --level 1 "compiling"
//! make 2>&1 | buildlog --capture build.log --append emit --level 0
//! ```
//!
//! ## Environment Variables
//!
//! - `BUILDLOG_VERBOSE`: `-v` count
//! - `BUILDLOG_VERBOSITY`: explicit verbosity
//! - `BUILDLOG_QUIET`: silence delegated output
//! - `BUILDLOG_CAPTURE`: capture file path
//! - `BUILDLOG_THRESHOLD`: highest level captured
//! - `RUST_LOG`: overrides the stderr filter (ignored with `--quiet`)

use std::io::IsTerminal;

use buildlog::cli::Cli;

fn main() -> miette::Result<()> {
    // Install miette's fancy panic and error report handler
    miette::set_panic_hook();

    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Use a simpler handler for non-TTY environments (CI, logs, etc.)
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse_args();

    buildlog::logging::init_subscriber(cli.global_opts().quiet())?;

    buildlog::commands::execute(&cli).map_err(Into::into)
}
