//! Routes a finished line to every enabled sink under one process-wide lock.
//!
//! The lock is acquired once per log call, immediately before the first
//! sink write, and the scoped guard releases it on every exit path. It is
//! never held across formatting, which is thread-local and lock-free.
//! Sinks run in a fixed order: debug output, stdout, stderr, file.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    sync::{Mutex, OnceLock, PoisonError},
};

use crate::log_target;

/// Which sinks and line segments are active, resolved once at process start.
///
/// The original build-time toggles become one plain struct: call
/// [`init_config`] before the first log call to override the defaults, or
/// let the first log call freeze [`LogConfig::default`] in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Forward lines to the platform debug channel (Windows only; a no-op elsewhere).
    pub debug_output: bool,
    /// Write and flush lines on standard output.
    pub stdout: bool,
    /// Write and flush lines on standard error.
    pub stderr: bool,
    /// Append lines to the current log target, when one is set.
    pub file: bool,
    /// Render the `[HH:MM:SS] ` segment.
    pub timestamp: bool,
    /// Render the right-justified `file(line) - ` segment.
    pub location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug_output: true,
            stdout: false,
            stderr: true,
            file: true,
            timestamp: true,
            location: true,
        }
    }
}

static CONFIG: OnceLock<LogConfig> = OnceLock::new();

/// Installs the process-wide logging configuration.
///
/// Effective only once: the first caller (or the first log call, which
/// freezes the defaults) wins, and later calls return the rejected value.
///
/// # Errors
///
/// Returns `Err(config)` when a configuration is already in place.
pub fn init_config(config: LogConfig) -> Result<(), LogConfig> {
    CONFIG.set(config).map_err(|_| config)
}

/// The active configuration, freezing the defaults on first use.
#[must_use]
pub fn config() -> &'static LogConfig {
    CONFIG.get_or_init(LogConfig::default)
}

static DISPATCH_LOCK: Mutex<()> = Mutex::new(());

/// Writes one finished line to every enabled sink.
///
/// Serialized process-wide so lines from different threads never
/// interleave byte-for-byte and file appends never race. Sink failures
/// (unwritable stream, missing or locked log file) are swallowed; the
/// remaining sinks are still attempted.
pub(crate) fn dispatch(line: &str) {
    let cfg = config();
    let _guard = DISPATCH_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    if cfg.debug_output {
        platform_debug_output(line);
    }

    if cfg.stdout {
        let mut out = io::stdout();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    if cfg.stderr {
        let mut err = io::stderr();
        let _ = err.write_all(line.as_bytes());
        let _ = err.flush();
    }

    if cfg.file
        && let Some(path) = log_target::log_target()
        && let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&path)
    {
        let _ = f.write_all(line.as_bytes());
    }
}

#[cfg(windows)]
fn platform_debug_output(line: &str) {
    use crate::encoding::widen;

    unsafe extern "system" {
        fn OutputDebugStringW(lp_output_string: *const u16);
    }

    let mut wide = widen(line);
    wide.push(0);
    // SAFETY: `wide` is NUL-terminated and outlives the call.
    unsafe { OutputDebugStringW(wide.as_ptr()) };
}

#[cfg(not(windows))]
fn platform_debug_output(_line: &str) {
    // No equivalent debug channel; stderr already covers interactive use.
}
