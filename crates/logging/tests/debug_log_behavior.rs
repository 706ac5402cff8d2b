//! Integration tests for debug records.
//!
//! Debug is hidden at the default threshold, carries the caller's location
//! once enabled, and uses a different label color on the console than in a
//! colored log file.

use std::fs;

use logging::{Logger, Severity, log_debug};
use time::OffsetDateTime;
use time::macros::datetime;

fn fixed_clock() -> OffsetDateTime {
    datetime!(2023-09-02 10:11:12 UTC)
}

fn capture() -> Logger<Vec<u8>> {
    Logger::with_console(Vec::new()).with_clock(fixed_clock)
}

#[test]
fn debug_hidden_by_default_then_shown() {
    let logger = capture();

    log_debug!(logger, "hidden");
    logger.set_level(Severity::Debug);
    log_debug!(logger, "shown");

    let output = String::from_utf8(logger.into_console()).unwrap();
    assert_eq!(output.lines().count(), 1, "{output}");
    assert!(output.contains("[Debug]"));
    assert!(output.contains("shown"));
    assert!(!output.contains("hidden"));
}

#[test]
fn console_debug_is_bright_white() {
    let logger = capture();
    logger.set_level(Severity::Debug);
    let line = line!() + 1;
    log_debug!(logger, "value = {}", 42);

    let output = String::from_utf8(logger.into_console()).unwrap();
    assert_eq!(
        output,
        format!(
            "\x1b[97m[Debug] [{}:{line}] [2023/09/02 - 10:11:12] value = 42\x1b[0m\n",
            file!()
        )
    );
}

#[test]
fn color_file_debug_uses_reset_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.log");
    let logger = capture();
    logger.set_level(Severity::Debug);
    logger.set_file_with_color(&path);

    log_debug!(logger, "to file");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("\x1b[0m[Debug] ["), "{contents}");
    assert!(contents.ends_with("to file\x1b[0m\n"), "{contents}");
}

#[test]
fn plain_file_debug_has_no_escapes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.log");
    let logger = capture();
    logger.set_level(Severity::Debug);
    logger.set_file(&path);

    log_debug!(logger, "plain");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains('\x1b'), "{contents:?}");
    assert!(contents.starts_with("[Debug] ["));
}
