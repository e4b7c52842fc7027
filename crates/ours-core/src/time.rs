//! Four-digit `HHMM` slot times with the class-schedule hour windows.

use std::fmt;

use serde::{Serialize, Serializer};

/// Minutes since midnight of the timetable's reference start of day (08:00).
pub const DAY_START_MINUTES: i32 = 8 * 60;

/// A validated `HHMM` time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    /// Parses a slot start time. Hours allowed: 00, 08-22.
    pub fn parse_start(s: &str) -> Result<Self, InvalidTime> {
        Self::parse_within(s, |hour| matches!(hour, 0 | 8..=22))
    }

    /// Parses a slot end time. Hours allowed: 00, 08-23.
    pub fn parse_end(s: &str) -> Result<Self, InvalidTime> {
        Self::parse_within(s, |hour| matches!(hour, 0 | 8..=23))
    }

    fn parse_within(s: &str, hour_allowed: impl Fn(u8) -> bool) -> Result<Self, InvalidTime> {
        let invalid = || InvalidTime(s.to_string());
        let &[h1, h0, m1, m0] = s.as_bytes() else {
            return Err(invalid());
        };
        if ![h1, h0, m1, m0].iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = (h1 - b'0') * 10 + (h0 - b'0');
        let minute = (m1 - b'0') * 10 + (m0 - b'0');
        if !hour_allowed(hour) || minute > 59 {
            return Err(invalid());
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(self) -> i32 {
        i32::from(self.hour) * 60 + i32::from(self.minute)
    }

    /// Human readable `HH:MM` form.
    pub fn printable(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Displays the compact `HHMM` form used in the source syntax.
impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

impl Serialize for SlotTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Error type for times outside the allowed `HHMM` window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTime(pub String);

impl fmt::Display for InvalidTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time: {}", self.0)
    }
}

impl std::error::Error for InvalidTime {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_inserts_colon() {
        let time = SlotTime::parse_start("0930").unwrap();
        assert_eq!(time.printable(), "09:30");
        assert_eq!(time.to_string(), "0930");
    }

    #[test]
    fn start_window_boundaries() {
        for ok in ["0000", "0800", "0959", "1200", "2259"] {
            assert!(SlotTime::parse_start(ok).is_ok(), "{ok} should be a valid start");
        }
        for bad in ["0100", "0700", "2300", "2400", "0960", "930", "09300", "09a0"] {
            assert!(SlotTime::parse_start(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn end_window_allows_eleven_pm() {
        assert!(SlotTime::parse_end("2359").is_ok());
        assert!(SlotTime::parse_start("2359").is_err());
        assert!(SlotTime::parse_end("0700").is_err());
    }

    #[test]
    fn minutes_since_midnight() {
        let time = SlotTime::parse_end("1030").unwrap();
        assert_eq!(time.minutes_since_midnight(), 630);
        assert_eq!(time.hour(), 10);
        assert_eq!(time.minute(), 30);
    }

    #[test]
    fn invalid_time_message() {
        let err = SlotTime::parse_start("2400").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: 2400");
    }
}
