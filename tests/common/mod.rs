use std::fs::File;
use std::io::Read;
use std::sync::Arc;

use buildlog::backend::MemoryBackend;
use buildlog::{Level, Logger};
use tempfile::NamedTempFile;

/// A file-capture logger writing to a fresh temporary file.
///
/// The returned `NamedTempFile` keeps the file alive; read it back with
/// [`read_capture`].
pub fn file_logger(
    verbosity: Level,
    threshold: Level,
) -> (Logger, Arc<MemoryBackend>, NamedTempFile) {
    let backend = MemoryBackend::new(verbosity);
    let capture = NamedTempFile::new().expect("failed to create capture file");
    let sink = capture.reopen().expect("failed to reopen capture file");
    let logger = Logger::to_file_with_backend(backend.clone(), sink, threshold);
    (logger, backend, capture)
}

/// Everything written to a capture file so far.
pub fn read_capture(capture: &NamedTempFile) -> String {
    let mut contents = String::new();
    File::open(capture.path())
        .and_then(|mut file| file.read_to_string(&mut contents))
        .expect("failed to read capture file");
    contents
}
