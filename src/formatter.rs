//! Builds one bounded, human-readable log line on the caller's stack.
//!
//! The line is assembled in strict left-to-right stages into a
//! [`LineBuffer`], a cursor over a fixed-size byte region that refuses any
//! write it cannot take whole. The first refused stage aborts the entire
//! line: the pipeline emits complete lines or nothing, never a truncated
//! one and never one missing its trailing newline.

use std::{
    fmt::{self, Write},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::log_level::LogLevel;

/// Fixed product tag opening every line (stage 1 writes this plus a space).
pub const LINE_TAG: &str = "DIAGLOG:";

/// Capacity of the per-call line buffer, including the trailing newline.
pub const LINE_CAPACITY: usize = 4096;

/// A formatting stage did not fit in the remaining buffer space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOverflow;

impl fmt::Display for LineOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "formatted log line exceeds {LINE_CAPACITY} bytes")
    }
}

impl std::error::Error for LineOverflow {}

/// Fixed-capacity, stack-scoped byte buffer with a write cursor.
///
/// Writes go through [`fmt::Write`]; a write that would overflow is
/// rejected in full (returning `fmt::Error`) rather than truncated, so the
/// buffer never holds a partially copied fragment.
pub struct LineBuffer {
    buf: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Bytes still available before the capacity limit.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        LINE_CAPACITY - self.len
    }

    /// The formatted content written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Content only ever lands via write_str, whole UTF-8 strings at a
        // time, so the slice is always valid.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Terminates the line with a single newline.
    ///
    /// Requires two spare bytes, keeping one in reserve past the newline;
    /// with less than that the line is treated as overflowed.
    pub const fn finish(&mut self) -> Result<(), LineOverflow> {
        if self.remaining() < 2 {
            return Err(LineOverflow);
        }
        self.buf[self.len] = b'\n';
        self.len += 1;
        Ok(())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if bytes.len() > self.remaining() {
            return Err(fmt::Error);
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

/// Assembles a complete log line, newline included, into `buf`.
///
/// Stages run left to right: tag, optional `[HH:MM:SS] ` timestamp,
/// optional right-justified call-site, the 7-char level label, the
/// caller's message, the newline. The first stage that does not fit
/// aborts the whole line.
///
/// # Errors
///
/// Returns [`LineOverflow`] when any stage would exceed the buffer; the
/// caller must emit nothing in that case.
pub fn format_line(
    buf: &mut LineBuffer,
    level: LogLevel,
    file: &str,
    line: u32,
    args: fmt::Arguments<'_>,
    timestamp: bool,
    location: bool,
) -> Result<(), LineOverflow> {
    write!(buf, "{LINE_TAG} ").map_err(|_| LineOverflow)?;

    if timestamp {
        let (h, m, s) = time_of_day_utc();
        write!(buf, "[{h:02}:{m:02}:{s:02}] ").map_err(|_| LineOverflow)?;
    }

    if location {
        write!(buf, "{:>20}({:4}) - ", basename(file), line).map_err(|_| LineOverflow)?;
    }

    write!(buf, "{} - ", level.label()).map_err(|_| LineOverflow)?;
    buf.write_fmt(args).map_err(|_| LineOverflow)?;
    buf.finish()
}

/// Final path component of `file`, accepting either separator style so
/// `file!()` paths from any platform render the same.
fn basename(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

/// Current UTC wall-clock time as (hour, minute, second).
///
/// Plain modular arithmetic on the UNIX clock; no calendar math and no
/// chrono import needed for a time-of-day stamp.
fn time_of_day_utc() -> (u64, u64, u64) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    ((secs / 3600) % 24, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn fmt_plain(msg: &str) -> Result<String, LineOverflow> {
        let mut buf = LineBuffer::new();
        format_line(
            &mut buf,
            LogLevel::Warning,
            "src/net/session.rs",
            42,
            format_args!("{msg}"),
            false,
            false,
        )?;
        Ok(buf.as_str().to_owned())
    }

    #[test]
    fn line_has_tag_label_message_and_one_newline() {
        let line = fmt_plain("socket closed").unwrap();
        assert_eq!(line, "DIAGLOG: Warning - socket closed\n");
    }

    #[test]
    fn location_segment_is_right_justified_basename() {
        let mut buf = LineBuffer::new();
        format_line(
            &mut buf,
            LogLevel::Error,
            "src\\net\\session.rs",
            7,
            format_args!("boom"),
            false,
            true,
        )
        .unwrap();
        assert_eq!(
            buf.as_str(),
            format!("DIAGLOG: {:>20}({:4}) - Error   - boom\n", "session.rs", 7)
        );
    }

    #[test]
    fn timestamp_segment_shape() {
        let mut buf = LineBuffer::new();
        format_line(
            &mut buf,
            LogLevel::Log,
            "main.rs",
            1,
            format_args!("up"),
            true,
            false,
        )
        .unwrap();
        let line = buf.as_str();
        // "DIAGLOG: [HH:MM:SS] ..."
        let stamp = &line["DIAGLOG: ".len().."DIAGLOG: [HH:MM:SS] ".len()];
        assert_eq!(stamp.len(), 11);
        assert!(stamp.starts_with('['));
        assert!(stamp.ends_with("] "));
        assert_eq!(&stamp[3..4], ":");
        assert_eq!(&stamp[6..7], ":");
    }

    #[test]
    fn oversized_message_is_rejected_whole() {
        let huge = "x".repeat(LINE_CAPACITY + 1);
        assert_eq!(fmt_plain(&huge), Err(LineOverflow));

        // Message alone fits, but tag + label push it over: still rejected.
        let near = "x".repeat(LINE_CAPACITY - 5);
        assert_eq!(fmt_plain(&near), Err(LineOverflow));
    }

    #[test]
    fn message_leaving_one_spare_byte_is_dropped() {
        // Fill so that exactly 1 byte remains before finish(): the newline
        // needs 2 spare bytes, so the line must be dropped.
        let prefix_len = "DIAGLOG: Warning - ".len();
        let msg = "y".repeat(LINE_CAPACITY - prefix_len - 1);
        assert_eq!(fmt_plain(&msg), Err(LineOverflow));

        // Two spare bytes is enough.
        let msg = "y".repeat(LINE_CAPACITY - prefix_len - 2);
        let line = fmt_plain(&msg).unwrap();
        assert_eq!(line.len(), LINE_CAPACITY - 1);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn buffer_rejects_write_without_partial_copy() {
        let mut buf = LineBuffer::new();
        buf.write_str("abc").unwrap();
        let huge = "z".repeat(LINE_CAPACITY);
        assert!(buf.write_str(&huge).is_err());
        // Failed write left no fragment behind.
        assert_eq!(buf.as_str(), "abc");
        assert_eq!(buf.remaining(), LINE_CAPACITY - 3);
    }

    #[test]
    fn basename_handles_both_separators() {
        assert_eq!(basename("a/b/c.rs"), "c.rs");
        assert_eq!(basename("a\\b\\c.rs"), "c.rs");
        assert_eq!(basename("plain.rs"), "plain.rs");
    }
}
