//! Line classifier and parser for the `ours@2.0` timetable syntax.
//!
//! A document is a header line followed by any mix of:
//! - activity declarations: `ID@COLOR@NAME`
//! - slot declarations: `ID:ICON:LOCATION:DAY:START:END`
//! - comments (`#...`) and blank lines
//!
//! Slots may only reference activities declared on an earlier line.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Color;
use crate::error::ParseError;
use crate::slot::{Activity, Slot};
use crate::time::SlotTime;
use crate::timetable::Timetable;
use crate::weekday::Weekday;

/// The only syntax version this parser accepts.
pub const SYNTAX_VERSION: &str = "2.0";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/\* ours@([0-9]\.[0-9]) \*/$").unwrap());

static ACTIVITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z0-9]+)@([A-Z]+|#[a-fA-F0-9]{6}#[a-fA-F0-9]{6})@(.+)$").unwrap()
});

/// Day and times are captured loosely and validated afterwards so the
/// violated rule can be reported.
static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z0-9]+):([-a-zA-Z0-9]*):([a-zA-Z0-9\t\x0C\r .-]+):([A-Z0-9]+):([0-9]{4}):([0-9]{4})$",
    )
    .unwrap()
});

/// A classified input line, borrowing its fields from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Header {
        version: &'a str,
    },
    Activity {
        id: &'a str,
        color: &'a str,
        name: &'a str,
    },
    Slot {
        id: &'a str,
        icon: &'a str,
        location: &'a str,
        day: &'a str,
        start: &'a str,
        end: &'a str,
    },
    Comment,
    Blank,
}

/// Classifies one line by shape only, without consulting parser state.
///
/// Line 1 must be the version header; every later line must be an activity,
/// a slot, a comment or blank.
pub fn classify_line(line: usize, text: &str) -> Result<Line<'_>, ParseError> {
    if line == 1 {
        let caps = HEADER_RE
            .captures(text)
            .ok_or(ParseError::UnsupportedSyntax { line })?;
        let version = caps.get(1).map_or("", |m| m.as_str());
        return Ok(Line::Header { version });
    }

    if let Some(caps) = ACTIVITY_RE.captures(text) {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        return Ok(Line::Activity {
            id: group(1),
            color: group(2),
            name: group(3),
        });
    }

    if let Some(caps) = SLOT_RE.captures(text) {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        return Ok(Line::Slot {
            id: group(1),
            icon: group(2),
            location: group(3),
            day: group(4),
            start: group(5),
            end: group(6),
        });
    }

    if text.len() > 1 && text.starts_with('#') {
        return Ok(Line::Comment);
    }

    if text.is_empty() {
        return Ok(Line::Blank);
    }

    Err(ParseError::InvalidSyntax { line })
}

/// Incremental parser fed one line at a time.
///
/// Each call to [`Parser::feed_line`] reports its own result, so callers can
/// stop at the first error or keep going and collect them.
#[derive(Debug, Default)]
pub struct Parser {
    timetable: Timetable,
    line: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines consumed so far.
    pub const fn lines_read(&self) -> usize {
        self.line
    }

    /// Classifies and applies the next line.
    pub fn feed_line(&mut self, text: &str) -> Result<(), ParseError> {
        self.line += 1;
        let line = self.line;

        match classify_line(line, text)? {
            Line::Header { version } => {
                if version != SYNTAX_VERSION {
                    return Err(ParseError::VersionMismatch {
                        line,
                        expected: SYNTAX_VERSION,
                        found: version.to_string(),
                    });
                }
            }
            Line::Activity { id, color, name } => self.add_activity(line, id, color, name)?,
            Line::Slot {
                id,
                icon,
                location,
                day,
                start,
                end,
            } => {
                let Some(activity) = self.timetable.get_mut(id) else {
                    return Err(ParseError::UnknownActivity {
                        line,
                        id: id.to_string(),
                    });
                };
                let day: Weekday = day.parse().map_err(|_| ParseError::InvalidDay {
                    line,
                    day: day.to_string(),
                })?;
                let invalid_time = |time: &str| ParseError::InvalidTime {
                    line,
                    time: time.to_string(),
                };
                let start = SlotTime::parse_start(start).map_err(|_| invalid_time(start))?;
                let end = SlotTime::parse_end(end).map_err(|_| invalid_time(end))?;

                activity.slots.push(Slot {
                    activity_id: id.to_string(),
                    icon: icon.to_string(),
                    location: location.to_string(),
                    day,
                    start,
                    end,
                });
            }
            Line::Comment | Line::Blank => {}
        }

        Ok(())
    }

    fn add_activity(
        &mut self,
        line: usize,
        id: &str,
        color: &str,
        name: &str,
    ) -> Result<(), ParseError> {
        if self.timetable.contains(id) {
            return Err(ParseError::DuplicateActivity {
                line,
                id: id.to_string(),
            });
        }
        let color = Color::resolve(color).map_err(|e| ParseError::UnknownColor {
            line,
            color: e.0,
        })?;

        tracing::debug!(line, id, color = color.name(), "registered activity");
        self.timetable.insert(Activity::new(id, name, color));
        Ok(())
    }

    /// Returns the parsed timetable. A document without any line has no header.
    pub fn finish(self) -> Result<Timetable, ParseError> {
        if self.line == 0 {
            return Err(ParseError::UnsupportedSyntax { line: 1 });
        }
        tracing::debug!(
            lines = self.line,
            activities = self.timetable.len(),
            slots = self.timetable.slot_count(),
            "parsed timetable"
        );
        Ok(self.timetable)
    }
}

/// Parses a whole document, stopping at the first error.
///
/// Lines end at `\n`; one trailing `\r` is dropped from each line, including
/// a last line that has no `\n`.
pub fn parse(input: &str) -> Result<Timetable, ParseError> {
    let mut parser = Parser::new();
    for text in input.split_terminator('\n') {
        parser.feed_line(text.strip_suffix('\r').unwrap_or(text))?;
    }
    parser.finish()
}
