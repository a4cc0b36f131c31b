//! Weekly time slot model.
//!
//! A slot is one bookable (day, start, end) interval of the fixed weekly
//! grid. Times are wall-clock `"HH:MM"` strings; the grid never spans
//! midnight, so lexicographic order equals chronological order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching days, Monday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All teaching days in week order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Full English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One schedulable interval of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Stable slot identifier (`"slot-NN"`).
    pub id: String,
    /// Day of the week.
    pub day: Weekday,
    /// Start time (`"HH:MM"`, inclusive).
    pub start_time: String,
    /// End time (`"HH:MM"`, exclusive).
    pub end_time: String,
    /// Position in the grid, 1-based, day-major.
    pub slot_number: u32,
}

impl TimeSlot {
    /// Creates a slot; the id is derived from the slot number.
    pub fn new(
        day: Weekday,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        slot_number: u32,
    ) -> Self {
        Self {
            id: format!("slot-{slot_number:02}"),
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
            slot_number,
        }
    }

    /// Whether two slots occupy the same bookable instant.
    ///
    /// Identity is day + start time only; end times are not compared.
    #[inline]
    pub fn same_instant(&self, day: Weekday, start_time: &str) -> bool {
        self.day == day && self.start_time == start_time
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start_time, self.end_time)
    }
}
