//! Packages committed entries into a timetable aggregate.

use chrono::{DateTime, Utc};

use crate::models::{ScheduleEntry, Timetable};

/// Timetable display name for a department/semester.
pub fn timetable_name(department: &str, semester: u32) -> String {
    format!("{department} - Semester {semester} Timetable")
}

/// Wraps assigner output with identity and metadata.
///
/// Performs no validation; conflicts are prevented upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler;

impl Assembler {
    /// Assembles an inactive timetable stamped with the current time.
    pub fn assemble(department: &str, semester: u32, entries: Vec<ScheduleEntry>) -> Timetable {
        Self::assemble_at(department, semester, entries, Utc::now())
    }

    /// Assembles with an explicit creation time.
    pub fn assemble_at(
        department: &str,
        semester: u32,
        entries: Vec<ScheduleEntry>,
        created_at: DateTime<Utc>,
    ) -> Timetable {
        Timetable::new(
            timetable_name(department, semester),
            department,
            semester,
            entries,
            created_at,
        )
    }
}
