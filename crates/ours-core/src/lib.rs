//! Core domain logic for ours timetables.
//!
//! This crate contains the fundamental types and logic for:
//! - Parsing: validating the `ours@2.0` line syntax into activities and slots
//! - Colors: the built-in palette and custom hex pairs
//! - Slot geometry: printable times, durations and inline styles for rendering

pub mod color;
pub mod error;
mod parser;
pub mod slot;
pub mod time;
mod timetable;
pub mod view;
pub mod weekday;

pub use color::{Color, UnknownColor};
pub use error::ParseError;
pub use parser::{Line, Parser, SYNTAX_VERSION, classify_line, parse};
pub use slot::{Activity, Slot};
pub use time::{InvalidTime, SlotTime};
pub use timetable::Timetable;
pub use view::SlotView;
pub use weekday::{UnknownDay, Weekday};
