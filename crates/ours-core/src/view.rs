//! Flattened per-slot record handed to the slot template.

use serde::Serialize;

use crate::slot::{Activity, Slot};
use crate::weekday::Weekday;

/// Everything a slot template can reference, with derived values precomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView<'a> {
    pub activity_id: &'a str,
    pub activity_name: &'a str,
    pub icon: &'a str,
    pub location: &'a str,
    pub day: Weekday,
    /// Compact `HHMM` start.
    pub start: String,
    /// Compact `HHMM` end.
    pub end: String,
    pub start_printable: String,
    pub end_printable: String,
    /// Minutes from start to end.
    pub duration: i32,
    /// Minutes after 08:00.
    pub start_offset: i32,
    /// Inline CSS for positioning and colors.
    pub styles: String,
    pub color_name: &'a str,
    pub background: &'a str,
    pub foreground: &'a str,
}

impl<'a> SlotView<'a> {
    pub fn new(activity: &'a Activity, slot: &'a Slot) -> Self {
        Self {
            activity_id: &activity.id,
            activity_name: &activity.name,
            icon: &slot.icon,
            location: &slot.location,
            day: slot.day,
            start: slot.start.to_string(),
            end: slot.end.to_string(),
            start_printable: slot.start_printable(),
            end_printable: slot.end_printable(),
            duration: slot.duration_minutes(),
            start_offset: slot.start_offset_minutes(),
            styles: slot.inline_style(&activity.color),
            color_name: activity.color.name(),
            background: activity.color.background(),
            foreground: activity.color.foreground(),
        }
    }
}
