//! Integration tests for the process-wide logger.
//!
//! Every test here mutates the shared logger, so all of them run serially and
//! start from the default configuration.

use std::fs;

use log4embedded::{LoggerConfig, OutputTarget, Severity, critical, debug, error, info, warning};
use serial_test::serial;

fn reset() {
    log4embedded::configure(LoggerConfig::default());
}

/// Checks the `[Label] [YYYY/MM/DD - hh:mm:ss] body` shape without a tag.
fn assert_untagged(line: &str, label: &str, body: &str) {
    let rest = line
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(" ["))
        .unwrap_or_else(|| panic!("unexpected prefix: {line:?}"));
    let (timestamp, tail) = rest.split_at(21);
    assert_eq!(tail, format!("] {body}"), "{line:?}");

    let bytes = timestamp.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        match index {
            4 | 7 => assert_eq!(*byte, b'/', "{timestamp}"),
            10 | 12 => assert_eq!(*byte, b' ', "{timestamp}"),
            11 => assert_eq!(*byte, b'-', "{timestamp}"),
            15 | 18 => assert_eq!(*byte, b':', "{timestamp}"),
            _ => assert!(byte.is_ascii_digit(), "{timestamp}"),
        }
    }
}

#[test]
#[serial]
fn default_state() {
    reset();
    assert_eq!(log4embedded::get_level(), Severity::Info);
    assert_eq!(log4embedded::logger().config(), LoggerConfig::default());
}

#[test]
#[serial]
fn level_setters_round_trip() {
    reset();
    log4embedded::set_level(Severity::Warning);
    assert_eq!(log4embedded::get_level(), Severity::Warning);

    log4embedded::set_level_raw(5);
    assert_eq!(log4embedded::get_level(), Severity::Debug);

    log4embedded::set_level_raw(42);
    assert_eq!(log4embedded::get_level(), Severity::Debug);
}

#[test]
#[serial]
fn macros_write_plain_lines_to_file() {
    reset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");

    log4embedded::set_level(Severity::Debug);
    log4embedded::set_file(&path);
    info!("Hello World!");
    warning!("Odd number: [{}]", 3);
    debug!("detail {}", 7);
    log4embedded::set_level(Severity::Warning);
    info!("filtered");
    reset();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "{contents}");
    assert_untagged(lines[0], "[Info]", "Hello World!");
    assert_untagged(lines[1], "[Warn]", "Odd number: [3]");
    assert!(lines[2].starts_with(&format!("[Debug] [{}:", file!())), "{}", lines[2]);
    assert!(!contents.contains('\x1b'));
}

#[test]
#[serial]
fn error_and_critical_carry_call_site() {
    reset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    log4embedded::set_file(&path);

    let line = line!() + 1;
    error!("e");
    critical!("c");
    reset();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert!(lines[0].starts_with(&format!("[Err] [{}:{line}] [", file!())), "{}", lines[0]);
    assert!(
        lines[1].starts_with(&format!("[Crit] [{}:{}] [", file!(), line + 1)),
        "{}",
        lines[1]
    );
}

#[test]
#[serial]
fn color_file_keeps_escapes() {
    reset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.txt");

    log4embedded::set_file_with_color(&path);
    info!("green");
    reset();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("\x1b[92m[Info] ["), "{contents:?}");
    assert!(contents.ends_with("] green\x1b[0m\n"), "{contents:?}");
}

#[test]
#[serial]
fn missing_directory_reverts_to_console() {
    reset();
    let dir = tempfile::tempdir().unwrap();
    log4embedded::set_file(dir.path().join("absent").join("log.txt"));
    assert!(!log4embedded::logger().config().colors_enabled);

    info!("goes to stdout");

    let config = log4embedded::logger().config();
    assert_eq!(config.target, OutputTarget::Console);
    assert!(config.colors_enabled);
}

#[test]
#[serial]
fn invalid_path_keeps_console() {
    reset();
    log4embedded::set_file("");
    assert_eq!(log4embedded::logger().config(), LoggerConfig::default());
}

#[test]
#[serial]
fn color_toggles() {
    reset();
    log4embedded::disable_colors();
    assert!(!log4embedded::logger().config().colors_enabled);
    log4embedded::enable_colors();
    assert!(log4embedded::logger().config().colors_enabled);
}

#[test]
#[serial]
fn init_from_env_applies_directives() {
    reset();
    // SAFETY: tests touching the environment run serially.
    unsafe {
        std::env::set_var(LoggerConfig::ENV_VAR, "level=crit,color=off");
    }
    let result = log4embedded::init_from_env();
    unsafe {
        std::env::remove_var(LoggerConfig::ENV_VAR);
    }

    result.unwrap();
    assert_eq!(log4embedded::get_level(), Severity::Critical);
    assert!(!log4embedded::logger().config().colors_enabled);
    reset();
}

#[test]
#[serial]
fn init_from_env_rejects_bad_input_and_keeps_state() {
    reset();
    log4embedded::set_level(Severity::Error);
    unsafe {
        std::env::set_var(LoggerConfig::ENV_VAR, "level=loud");
    }
    let result = log4embedded::init_from_env();
    unsafe {
        std::env::remove_var(LoggerConfig::ENV_VAR);
    }

    assert!(result.is_err());
    assert_eq!(log4embedded::get_level(), Severity::Error);
    reset();
}
