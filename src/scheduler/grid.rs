//! Fixed weekly slot grid.
//!
//! Six teaching days × six daily hours = 36 slots, numbered 1..=36 in
//! day-major, time-minor order. There is a short break between 11:00 and
//! 11:15 and a lunch gap between 13:15 and 14:00; neither is schedulable.

use once_cell::sync::Lazy;

use crate::models::{TimeSlot, Weekday};

/// Daily teaching hours as (start, end).
pub const DAILY_INTERVALS: [(&str, &str); 6] = [
    ("09:00", "10:00"),
    ("10:00", "11:00"),
    ("11:15", "12:15"),
    ("12:15", "13:15"),
    ("14:00", "15:00"),
    ("15:00", "16:00"),
];

/// Number of slots in the weekly grid.
pub const SLOT_COUNT: usize = Weekday::ALL.len() * DAILY_INTERVALS.len();

static STANDARD: Lazy<Vec<TimeSlot>> = Lazy::new(SlotGrid::generate);

/// Producer of the weekly slot universe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotGrid;

impl SlotGrid {
    /// Builds the 36-slot grid. Pure and deterministic.
    pub fn generate() -> Vec<TimeSlot> {
        let mut slots = Vec::with_capacity(SLOT_COUNT);
        let mut slot_number = 1;
        for day in Weekday::ALL {
            for (start, end) in DAILY_INTERVALS {
                slots.push(TimeSlot::new(day, start, end, slot_number));
                slot_number += 1;
            }
        }
        slots
    }

    /// The process-wide grid, built once and shared read-only.
    pub fn standard() -> &'static [TimeSlot] {
        &STANDARD
    }
}
