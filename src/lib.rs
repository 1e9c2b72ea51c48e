//! diaglog is a process-wide, multi-sink diagnostic logging core.
//!
//! Arbitrary threads hand it leveled, formatted messages; it emits them to
//! every configured sink (platform debug output, stdout, stderr, an
//! append-mode log file) as complete, newline-terminated lines that never
//! interleave across threads. Assertion failures report through the same
//! pipeline, and a positional narrow/wide encoding bridge serves sink
//! APIs that require a specific text width.
//!
//! Logging never fails observably: an oversized line, an invalid raw
//! level, or an unavailable sink means fewer lines, never a panic or an
//! error surfaced to the caller.
//!
//! The crate is structured into small modules, each owning one stage of
//! the pipeline.

/// Assertion-failure reporting through the logging pipeline.
pub mod assertion;
/// Routes finished lines to the enabled sinks under the dispatch lock.
pub mod dispatcher;
/// Positional narrow/wide string conversion helpers.
pub mod encoding;
/// Bounded line formatting into a fixed-capacity stack buffer.
pub mod formatter;
/// Severity levels and raw-level validation.
pub mod log_level;
/// Leveled call-site macros (`diag_log!`, `diag_warn!`, ...).
pub mod log_macros;
/// Process-wide log-target path: get, set, delete.
pub mod log_target;
/// The `log` / `log_raw` entry points.
pub mod logger;

pub use assertion::report_assert_failure;
pub use dispatcher::{LogConfig, config, init_config};
pub use encoding::{narrow, widen};
pub use log_level::LogLevel;
pub use log_target::{delete_log_target, log_target, set_log_target};
pub use logger::{log, log_raw};
