use std::sync::{Arc, Mutex};

use crate::backend::MemoryBackend;
use crate::logger::{Level, Logger, NONE, Route};

fn capture(backend: &Arc<MemoryBackend>, threshold: Level) -> (Logger, Arc<Mutex<Vec<u8>>>) {
    let sink = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::shared_with_backend(backend.clone(), sink.clone(), threshold);
    (logger, sink)
}

fn contents(sink: &Mutex<Vec<u8>>) -> String {
    String::from_utf8(sink.lock().unwrap().clone()).unwrap()
}

// ========== discard ==========

#[test]
fn test_discard_is_never_enabled() {
    for level in [0, 1, 2, 10, u8::MAX] {
        assert!(!NONE.is(level));
        assert!(!Logger::none().is(level));
    }
}

#[test]
fn test_discard_v_returns_discard() {
    assert_eq!(NONE.v(0).route(), Route::Discard);
    assert_eq!(NONE.v(7).v(0).route(), Route::Discard);
}

#[test]
fn test_default_logger_discards() {
    assert_eq!(Logger::default().route(), Route::Discard);
}

// ========== global ==========

#[test]
fn test_global_is_follows_gate() {
    let backend = MemoryBackend::new(2);
    let logger = Logger::with_backend(backend.clone());
    assert!(logger.is(0));
    assert!(logger.is(2));
    assert!(!logger.is(3));
}

#[test]
fn test_global_v_captures_gate_state() {
    let backend = MemoryBackend::new(1);
    let logger = Logger::with_backend(backend.clone());
    assert_eq!(logger.v(1).route(), Route::Gated { enabled: true });
    assert_eq!(logger.v(2).route(), Route::Gated { enabled: false });
}

#[test]
fn test_global_infof_forwards_unconditionally() {
    let backend = MemoryBackend::new(0);
    let logger = Logger::with_backend(backend.clone());
    logger.infof("direct");
    assert_eq!(backend.messages(), vec!["direct"]);
}

#[test]
fn test_gated_infof_respects_captured_state() {
    let backend = MemoryBackend::new(1);
    let logger = Logger::with_backend(backend.clone());

    crate::infof!(logger.v(1), "kept {}", 1);
    crate::infof!(logger.v(2), "dropped {}", 2);

    assert_eq!(backend.messages(), vec!["kept 1"]);
}

#[test]
fn test_gated_state_is_captured_at_v_time() {
    let backend = MemoryBackend::new(3);
    let logger = Logger::with_backend(backend.clone());
    let gated = logger.v(3);

    backend.set_verbosity(0);
    gated.infof("still open");

    assert_eq!(backend.messages(), vec!["still open"]);
}

#[test]
fn test_gated_v_requeries_gate() {
    let backend = MemoryBackend::new(0);
    let gated = Logger::with_backend(backend.clone()).v(5);
    assert_eq!(gated.v(4).route(), Route::Discard);
    assert!(!gated.is(4));

    backend.set_verbosity(4);
    assert_eq!(gated.v(4).route(), Route::Global);
    assert!(gated.is(4));
}

#[test]
fn test_infof_records_caller_location() {
    let backend = MemoryBackend::new(0);
    let logger = Logger::with_backend(backend.clone());
    let line = line!() + 1;
    logger.infof("here");

    let records = backend.records();
    assert_eq!(records[0].file, file!());
    assert_eq!(records[0].line, line);
}

// ========== file capture ==========

#[test]
fn test_file_is_union_of_local_and_global() {
    let backend = MemoryBackend::new(4);
    let (logger, _) = capture(&backend, 2);
    assert!(logger.is(1));
    assert!(logger.is(2));
    assert!(logger.is(4));
    assert!(!logger.is(5));

    // local levels stay true even when the gate is closed
    let quiet = MemoryBackend::new(0);
    let (logger, _) = capture(&quiet, 2);
    assert!(logger.is(2));
    assert!(!logger.is(3));
}

#[test]
fn test_file_v_three_way_policy() {
    let backend = MemoryBackend::new(4);
    let (logger, _) = capture(&backend, 2);
    assert_eq!(logger.v(2).route(), Route::Local { threshold: 2 });
    assert_eq!(logger.v(3).route(), Route::Global);
    assert_eq!(logger.v(5).route(), Route::Discard);
}

#[test]
fn test_file_v_discards_local_levels_when_gate_closed() {
    let backend = MemoryBackend::new(0);
    let (logger, sink) = capture(&backend, 2);
    assert_eq!(logger.v(1).route(), Route::Discard);

    logger.v(1).infof("never written");
    assert!(contents(&sink).is_empty());
}

#[test]
fn test_file_infof_appends_missing_newline() {
    let backend = MemoryBackend::new(2);
    let (logger, sink) = capture(&backend, 2);
    logger.v(1).infof("hello");
    assert_eq!(contents(&sink), "hello\n");
}

#[test]
fn test_file_infof_keeps_existing_newline() {
    let backend = MemoryBackend::new(2);
    let (logger, sink) = capture(&backend, 2);
    logger.v(1).infof("hello\n");
    assert_eq!(contents(&sink), "hello\n");
}

#[test]
fn test_file_macro_newline_follows_format_string() {
    let backend = MemoryBackend::new(0);
    let (logger, sink) = capture(&backend, 0);

    // newline from an argument is not the format's
    crate::infof!(logger.v(0), "{}", "a\n");
    assert_eq!(contents(&sink), "a\n\n");

    sink.lock().unwrap().clear();
    crate::infof!(logger.v(0), "line {}\n", 1);
    assert_eq!(contents(&sink), "line 1\n");
}

#[test]
fn test_file_plain_infof_checks_rendered_text() {
    let backend = MemoryBackend::new(0);
    let (logger, sink) = capture(&backend, 0);
    logger.v(0).infof(format_args!("{}", "a\n"));
    assert_eq!(contents(&sink), "a\n");
}

#[test]
fn test_macro_forwards_caller_location() {
    let backend = MemoryBackend::new(0);
    let logger = Logger::with_backend(backend.clone());
    let line = line!() + 1;
    crate::infof!(logger.v(0), "from {}", "macro");

    let records = backend.records();
    assert_eq!(records[0].message, "from macro");
    assert_eq!(records[0].line, line);
}

#[test]
fn test_file_infof_does_not_gate() {
    let backend = MemoryBackend::new(0);
    let (logger, sink) = capture(&backend, 0);
    logger.infof("written anyway");
    assert_eq!(contents(&sink), "written anyway\n");
    assert!(backend.messages().is_empty());
}

#[test]
fn test_file_high_levels_go_to_backend_not_sink() {
    let backend = MemoryBackend::new(5);
    let (logger, sink) = capture(&backend, 2);
    crate::infof!(logger.v(5), "level {}", 5);

    assert!(contents(&sink).is_empty());
    // the global logger returned by v forwards directly
    assert_eq!(backend.messages(), vec!["level 5"]);
}

#[test]
fn test_file_chained_v_into_global_regates() {
    let backend = MemoryBackend::new(3);
    let (logger, sink) = capture(&backend, 1);

    logger.v(3).v(4).infof("too verbose");
    logger.v(3).v(2).infof("fine");

    assert!(contents(&sink).is_empty());
    assert_eq!(backend.messages(), vec!["fine"]);
}

#[test]
fn test_file_clones_share_sink() {
    let backend = MemoryBackend::new(1);
    let (logger, sink) = capture(&backend, 1);
    logger.v(0).infof("a");
    logger.v(1).v(0).infof("b");
    assert_eq!(contents(&sink), "a\nb\n");
}

#[test]
fn test_file_write_errors_are_ignored() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let backend = MemoryBackend::new(0);
    let logger = Logger::to_file_with_backend(backend, Broken, 0);
    logger.infof("lost");
}

#[test]
fn test_debug_shows_route() {
    let backend = MemoryBackend::new(0);
    let (logger, _) = capture(&backend, 3);
    assert_eq!(
        format!("{logger:?}"),
        "Logger { route: Local { threshold: 3 } }"
    );
}

#[test]
fn test_route_display() {
    assert_eq!(Route::Discard.to_string(), "discard");
    assert_eq!(Route::Global.to_string(), "global");
    assert_eq!(Route::Gated { enabled: true }.to_string(), "gated (open)");
    assert_eq!(Route::Gated { enabled: false }.to_string(), "gated (closed)");
    assert_eq!(
        Route::Local { threshold: 2 }.to_string(),
        "local (threshold 2)"
    );
}

#[test]
fn test_shared_instances() {
    assert_eq!(NONE.route(), Route::Discard);
    assert_eq!(crate::logger::LOG.route(), Route::Global);
    assert_eq!(Logger::global().route(), Route::Global);
}
