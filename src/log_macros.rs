//! Leveled call-site macros over [`logger::log`](crate::logger::log).
//!
//! # Feature Flags
//! `diag_debug!` is controlled by the `log-debug` cargo feature (on by
//! default). When disabled, the macro expands to `()`, removing all
//! formatting and argument evaluation at compile time. The other levels
//! are always compiled in.

// ============================================================================
// 1. GENERIC INTERNAL MACRO (The "Worker")
// ============================================================================
// Kept available so the level macros below can share one expansion.

#[macro_export]
macro_rules! diag_log_at {
    ($lvl:expr, $($arg:tt)*) => {{
        $crate::logger::log($lvl, file!(), line!(), format_args!($($arg)*));
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS
// ============================================================================

// ---------------------- DEBUG (feature gated) ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! diag_debug { ($($arg:tt)*) => { $crate::diag_log_at!($crate::log_level::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! diag_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- LOG ----------------------
#[macro_export]
macro_rules! diag_log { ($($arg:tt)*) => { $crate::diag_log_at!($crate::log_level::LogLevel::Log, $($arg)*) } }

// ---------------------- WARNING ----------------------
#[macro_export]
macro_rules! diag_warn { ($($arg:tt)*) => { $crate::diag_log_at!($crate::log_level::LogLevel::Warning, $($arg)*) } }

// ---------------------- ERROR ----------------------
#[macro_export]
macro_rules! diag_error { ($($arg:tt)*) => { $crate::diag_log_at!($crate::log_level::LogLevel::Error, $($arg)*) } }

// ---------------------- FATAL ----------------------
// Reports only; trapping or aborting after a Fatal line is the caller's call.
#[macro_export]
macro_rules! diag_fatal { ($($arg:tt)*) => { $crate::diag_log_at!($crate::log_level::LogLevel::Fatal, $($arg)*) } }

// ============================================================================
// 3. ASSERTION MACRO
// ============================================================================

/// Evaluates a condition and reports it through the pipeline when false.
///
/// Expands to one `report_assert_failure` call carrying the stringified
/// expression; execution continues either way.
#[macro_export]
macro_rules! diag_assert {
    ($cond:expr) => {{
        if !$cond {
            $crate::assertion::report_assert_failure(
                stringify!($cond),
                file!(),
                line!(),
                module_path!(),
            );
        }
    }};
}
