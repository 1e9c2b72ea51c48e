/// Defines the severity levels for log messages.
///
/// Raw discriminants start at 1 so that [`RAW_FIRST`] and [`RAW_NUM_TYPES`]
/// bound the valid range on both sides; a raw value is a real level only
/// when it lies strictly between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i32)]
pub enum LogLevel {
    /// Designates fine-grained informational events, usually compiled out of release builds.
    Debug = 1,
    /// Designates routine informational messages.
    Log = 2,
    /// Designates potentially harmful situations.
    Warning = 3,
    /// Designates error events that might still allow the application to continue running.
    Error = 4,
    /// Designates unrecoverable conditions; the caller decides whether to terminate.
    Fatal = 5,
}

/// Sentinel below the lowest valid raw level.
pub const RAW_FIRST: i32 = 0;
/// Sentinel above the highest valid raw level.
pub const RAW_NUM_TYPES: i32 = 6;

impl LogLevel {
    /// Converts an untrusted raw level to a `LogLevel`.
    ///
    /// Returns `None` for any value outside `(RAW_FIRST, RAW_NUM_TYPES)`.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Debug),
            2 => Some(Self::Log),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Fixed 7-character padded label used in the formatted line.
    ///
    /// Equal widths keep the message column aligned across levels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "Debug  ",
            Self::Log => "Log    ",
            Self::Warning => "Warning",
            Self::Error => "Error  ",
            Self::Fatal => "Fatal  ",
        }
    }

    /// Raw discriminant of this level.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn from_raw_accepts_exactly_the_open_interval() {
        assert_eq!(LogLevel::from_raw(RAW_FIRST), None);
        assert_eq!(LogLevel::from_raw(RAW_NUM_TYPES), None);
        assert_eq!(LogLevel::from_raw(-1), None);
        assert_eq!(LogLevel::from_raw(42), None);

        assert_eq!(LogLevel::from_raw(1), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_raw(2), Some(LogLevel::Log));
        assert_eq!(LogLevel::from_raw(3), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_raw(4), Some(LogLevel::Error));
        assert_eq!(LogLevel::from_raw(5), Some(LogLevel::Fatal));
    }

    #[test]
    fn labels_are_seven_chars() {
        for lvl in [
            LogLevel::Debug,
            LogLevel::Log,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Fatal,
        ] {
            assert_eq!(lvl.label().len(), 7, "label for {lvl:?}");
        }
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(LogLevel::Debug < LogLevel::Log);
        assert!(LogLevel::Log < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn raw_round_trip() {
        for raw in RAW_FIRST + 1..RAW_NUM_TYPES {
            let lvl = LogLevel::from_raw(raw).unwrap();
            assert_eq!(lvl.as_raw(), raw);
        }
    }
}
