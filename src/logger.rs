//! Logging entry points: level check, bounded formatting, sink fan-out.
//!
//! Neither entry returns anything or panics: a log call that cannot
//! complete (oversized line, invalid raw level, unavailable sink) absorbs
//! the failure and produces fewer lines, never an error in the caller's
//! control flow. A facility that can fail loudly risks crashing around
//! the very failure it is meant to report.

use std::fmt;

use crate::{
    assertion::report_assert_failure,
    dispatcher::{self, config},
    formatter::{LineBuffer, format_line},
    log_level::LogLevel,
};

/// Formats and emits one log line to every enabled sink.
///
/// `file` and `line` locate the call site (`file!()` / `line!()`); the
/// [`diag_log!`](crate::diag_log) macro family fills them in. Formatting
/// happens in a stack buffer with no lock held; a line that does not fit
/// is dropped whole, so sinks only ever see complete, newline-terminated
/// lines.
pub fn log(level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
    let cfg = config();
    let mut buf = LineBuffer::new();
    if format_line(
        &mut buf,
        level,
        file,
        line,
        args,
        cfg.timestamp,
        cfg.location,
    )
    .is_err()
    {
        return;
    }
    dispatcher::dispatch(buf.as_str());
}

/// [`log`] for untrusted numeric levels (FFI boundaries, wire values).
///
/// A raw level outside the valid range is an internal error: exactly one
/// Error-level assertion line is emitted in place of the message, and the
/// call is abandoned without crashing.
pub fn log_raw(raw: i32, file: &str, line: u32, args: fmt::Arguments<'_>) {
    match LogLevel::from_raw(raw) {
        Some(level) => log(level, file, line, args),
        None => report_assert_failure(
            "RAW_FIRST < level && level < RAW_NUM_TYPES",
            file,
            line,
            "log_raw",
        ),
    }
}
