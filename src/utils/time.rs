//! Minute-of-day helpers shared by the schedule editor and the stats views.
//!
//! Block boundaries travel over the wire as `"HH:MM"` strings; internally
//! they are minutes since midnight (`0..=1439`).

/// Minutes since midnight.
pub type Minutes = u16;

/// Last representable minute of a day (23:59).
pub const MAX_MINUTE: Minutes = 1439;

/// Parses an `"HH:MM"` string into minutes since midnight.
///
/// Returns `None` for anything that is not a well-formed time of day.
pub fn parse_hhmm(s: &str) -> Option<Minutes> {
    let (h, m) = s.split_once(':')?;
    let hours: u16 = h.parse().ok()?;
    let minutes: u16 = m.parse().ok()?;
    if hours > 23 || minutes > 59 || m.len() != 2 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes since midnight as `"HH:MM"`.
pub fn format_hhmm(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a fractional minute total as an `"HH:MM"` clock label, e.g. the
/// drive-stats "Elapsed Time" card (`265.0` -> `"04:25"`).
pub fn format_clock(total_minutes: f64) -> String {
    let whole = total_minutes.max(0.0).floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// Serde adapter for block boundaries: `"HH:MM"` on the wire, minutes of day
/// in memory. Used via `#[serde(with = "crate::utils::time::hhmm")]`.
pub mod hhmm {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{Minutes, format_hhmm, parse_hhmm};

    pub fn serialize<S: Serializer>(value: &Minutes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_hhmm(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Minutes, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hhmm(&s).ok_or_else(|| D::Error::custom(format!("invalid time of day '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("16:05"), Some(965));
        assert_eq!(parse_hhmm("23:59"), Some(MAX_MINUTE));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("12:5"), None);
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm("noon"), None);
    }

    #[test]
    fn test_format_hhmm() {
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(965), "16:05");
        assert_eq!(format_hhmm(MAX_MINUTE), "23:59");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(265.0), "04:25");
        assert_eq!(format_clock(59.9), "00:59");
        assert_eq!(format_clock(-3.0), "00:00");
    }
}
