//! Probe command implementation.

use std::fmt;

use crate::logger::{Level, Logger, Route};

/// What a logger would do with a message at one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    /// The probed level.
    pub level: Level,
    /// Result of `is(level)`.
    pub enabled: bool,
    /// Route of `v(level)`.
    pub route: Route,
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "level: {}", self.level)?;
        writeln!(f, "is: {}", self.enabled)?;
        writeln!(f, "route: {}", self.route)
    }
}

/// Probes `logger` at `level` without emitting anything.
pub fn probe(logger: &Logger, level: Level) -> Probe {
    Probe {
        level,
        enabled: logger.is(level),
        route: logger.v(level).route(),
    }
}
