//! Double-booking predicate.
//!
//! A candidate (cohort, instructor, room) on a slot conflicts with a
//! committed entry when both sit on the same day and start time and they
//! share at least one of the three resources. Intervals are not checked
//! for overlap: each resource is unique per exact slot.

use crate::models::{ScheduleEntry, TimeSlot};

/// Stateless conflict checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictTracker;

impl ConflictTracker {
    /// Whether the candidate can be placed on `slot` without double-booking.
    ///
    /// The committed set only grows during a run, so callers re-check after
    /// every commit.
    pub fn is_available(
        committed: &[ScheduleEntry],
        cohort_id: &str,
        instructor_id: &str,
        room_id: &str,
        slot: &TimeSlot,
    ) -> bool {
        Self::first_conflict(committed, cohort_id, instructor_id, room_id, slot).is_none()
    }

    /// The earliest committed entry that blocks the candidate, if any.
    pub fn first_conflict<'a>(
        committed: &'a [ScheduleEntry],
        cohort_id: &str,
        instructor_id: &str,
        room_id: &str,
        slot: &TimeSlot,
    ) -> Option<&'a ScheduleEntry> {
        committed.iter().find(|e| {
            e.occupies(slot)
                && (e.cohort_id == cohort_id
                    || e.instructor_id == instructor_id
                    || e.room_id == room_id)
        })
    }
}
