//! Timetable (solution) model.
//!
//! A timetable is the ordered set of committed entries produced by one
//! generation run, plus identity and metadata. Entries are created only
//! by the assigner and are never moved or removed afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TimeSlot, Weekday};

/// One committed (cohort, subject, instructor, room, slot) assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Batch (cohort) attending.
    pub cohort_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Faculty member teaching.
    pub instructor_id: String,
    /// Room used.
    pub room_id: String,
    /// Grid slot id.
    pub slot_id: String,
    /// Grid slot number (1-based).
    pub slot_number: u32,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleEntry {
    /// Commits a new entry on `slot`, denormalizing the slot fields.
    pub(crate) fn commit(
        cohort_id: impl Into<String>,
        subject_id: impl Into<String>,
        instructor_id: impl Into<String>,
        room_id: impl Into<String>,
        slot: &TimeSlot,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            cohort_id: cohort_id.into(),
            subject_id: subject_id.into(),
            instructor_id: instructor_id.into(),
            room_id: room_id.into(),
            slot_id: slot.id.clone(),
            slot_number: slot.slot_number,
            day: slot.day,
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
        }
    }

    /// Whether this entry occupies the given day + start time.
    #[inline]
    pub fn occupies(&self, slot: &TimeSlot) -> bool {
        slot.same_instant(self.day, &self.start_time)
    }
}

/// A generated weekly timetable for one department and semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    pub id: String,
    /// Display name, `"<department> - Semester <semester> Timetable"`.
    pub name: String,
    pub department: String,
    pub semester: u32,
    entries: Vec<ScheduleEntry>,
    pub created_at: DateTime<Utc>,
    /// Toggled only by collaborators; always `false` at creation.
    pub is_active: bool,
}

impl Timetable {
    /// Creates a timetable around a fixed entry sequence.
    pub(crate) fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        semester: u32,
        entries: Vec<ScheduleEntry>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            department: department.into(),
            semester,
            entries,
            created_at,
            is_active: false,
        }
    }

    /// Entries in commit order (batch-major, subject-major, slot-minor).
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry was committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries attended by a cohort.
    pub fn entries_for_cohort(&self, cohort_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.cohort_id == cohort_id)
            .collect()
    }

    /// Entries taught by an instructor.
    pub fn entries_for_instructor(&self, instructor_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.instructor_id == instructor_id)
            .collect()
    }

    /// Entries held in a room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.room_id == room_id).collect()
    }

    /// Hours committed for a (cohort, subject) pair.
    pub fn hours_assigned(&self, cohort_id: &str, subject_id: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.cohort_id == cohort_id && e.subject_id == subject_id)
            .count() as u32
    }
}
