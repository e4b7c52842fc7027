//! The five day buckets of a timetable week.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A weekday slot bucket, Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Every bucket in rendering order.
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Zero-based bucket index (Monday is 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase day name, also used as the base template partial name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = UnknownDay;

    /// Parses a slot day token: `MON`..`FRI` or `01`..`05`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MON" | "01" => Ok(Self::Monday),
            "TUE" | "02" => Ok(Self::Tuesday),
            "WED" | "03" => Ok(Self::Wednesday),
            "THU" | "04" => Ok(Self::Thursday),
            "FRI" | "05" => Ok(Self::Friday),
            _ => Err(UnknownDay(s.to_string())),
        }
    }
}

/// Error type for unrecognized day tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDay(pub String);

impl fmt::Display for UnknownDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown day: {}", self.0)
    }
}

impl std::error::Error for UnknownDay {}
