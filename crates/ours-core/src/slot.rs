//! Activities and the time slots they own.

use serde::Serialize;

use crate::color::Color;
use crate::time::{DAY_START_MINUTES, SlotTime};
use crate::weekday::Weekday;

/// Vertical scale applied to minutes when positioning a slot, in minutes per `vh`.
const MINUTES_PER_VH: f64 = 10.0;

/// A named, colored category of recurring events, such as a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Unique uppercase alphanumeric key.
    pub id: String,

    pub name: String,

    pub color: Color,

    /// Slots in declaration order.
    pub slots: Vec<Slot>,
}

impl Activity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            slots: Vec::new(),
        }
    }
}

/// One scheduled occurrence of an activity.
///
/// The owning activity is referenced by `activity_id` and resolved through the
/// [`Timetable`](crate::Timetable) that holds both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub activity_id: String,

    /// Icon name, possibly empty.
    pub icon: String,

    pub location: String,

    pub day: Weekday,

    pub start: SlotTime,

    pub end: SlotTime,
}

impl Slot {
    /// Start time as `HH:MM`.
    pub fn start_printable(&self) -> String {
        self.start.printable()
    }

    /// End time as `HH:MM`.
    pub fn end_printable(&self) -> String {
        self.end.printable()
    }

    /// Minutes between 08:00 and the slot start. Negative for slots starting at midnight.
    pub fn start_offset_minutes(&self) -> i32 {
        self.start.minutes_since_midnight() - DAY_START_MINUTES
    }

    /// Minutes from start to end. Not checked against `end > start`.
    pub fn duration_minutes(&self) -> i32 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    /// Inline CSS placing the slot in its day column and painting it with `color`.
    pub fn inline_style(&self, color: &Color) -> String {
        let height = f64::from(self.duration_minutes()) / MINUTES_PER_VH;
        let top = f64::from(self.start_offset_minutes()) / MINUTES_PER_VH;
        format!(
            "height: {height:.1}vh; top: {top:.1}vh; background-color: {}; color: {};",
            color.background(),
            color.foreground(),
        )
    }
}
