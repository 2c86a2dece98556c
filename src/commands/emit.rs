//! Emit command implementation.

use std::io::BufRead;

use crate::error::{BuildLogError, Result};
use crate::logger::{Level, Logger};

/// Emits `messages` through `logger.v(level)`, or every line of `input` when
/// `messages` is empty. Returns how many messages were handed to the logger,
/// whether or not the gate let them through.
///
/// Input lines are decoded lossily, so invalid UTF-8 is replaced rather than
/// ending the stream. A trailing `\n` or `\r\n` is stripped.
pub fn emit<R: BufRead>(
    logger: &Logger,
    level: Level,
    messages: &[String],
    mut input: R,
) -> Result<usize> {
    let log = logger.v(level);

    if !messages.is_empty() {
        for message in messages {
            log.infof(message);
        }
        return Ok(messages.len());
    }

    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|source| BuildLogError::IoError {
                stream: "stdin",
                source,
            })?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        log.infof(String::from_utf8_lossy(&buf));
        count += 1;
    }
    Ok(count)
}
