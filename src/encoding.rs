//! Positional narrow/wide string bridge for sink APIs with a fixed text width.
//!
//! These are deliberately *not* real encoding conversions: each unit maps
//! positionally to one unit of the other width, truncating where the value
//! does not fit. Callers that depend on the exact truncation behavior
//! (e.g. round-tripping Latin-1 payloads) rely on this staying positional.

/// Expands each `char` of `s` to one wide unit of the same ordinal value.
///
/// Length in units equals the input's `char` count; never fails. Characters
/// above U+FFFF are truncated to their low 16 bits (accepted limitation of
/// the positional scheme, same as [`narrow`]'s low-byte truncation).
#[must_use]
pub fn widen(s: &str) -> Vec<u16> {
    s.chars().map(|c| c as u16).collect()
}

/// Truncates each wide unit of `w` to its low byte, positionally.
///
/// Lossy for units with high-byte content; the result holds the Latin-1
/// character for each low byte. This is a documented limitation, not an
/// error condition.
#[must_use]
pub fn narrow(w: &[u16]) -> String {
    w.iter().map(|&u| char::from(u as u8)).collect()
}
