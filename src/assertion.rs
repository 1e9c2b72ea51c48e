//! Assertion-failure reporting through the logging pipeline.

use crate::{log_level::LogLevel, logger};

/// Reports a failed condition as a single Error-level log line.
///
/// The line carries the literal condition text; `_function` is accepted
/// for call-site symmetry with [`diag_assert!`](crate::diag_assert) but
/// not rendered. This reports only — it does not unwind, raise, or
/// terminate; whether to trap afterwards is the caller's decision.
pub fn report_assert_failure(condition: &str, file: &str, line: u32, _function: &str) {
    logger::log(
        LogLevel::Error,
        file,
        line,
        format_args!("Assertion failed: '{condition}'"),
    );
}
