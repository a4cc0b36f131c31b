//! Integrity checks for catalog input and generated timetables.
//!
//! Catalog checks are advisory: the generator tolerates every condition
//! reported here (unknown subject references are ignored, zero-hour
//! subjects place nothing). Timetable checks verify the three
//! double-booking invariants:
//! - no cohort twice on the same day + start time
//! - no instructor twice on the same day + start time
//! - no room twice on the same day + start time

use std::collections::HashSet;

use crate::models::{ScheduleEntry, Timetable, Weekday};
use crate::scheduler::CatalogSnapshot;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records of the same kind share an ID.
    DuplicateId,
    /// A batch lists a subject absent from the catalog.
    UnknownSubject,
    /// A subject has a zero weekly quota.
    ZeroHours,
    /// A cohort is booked twice at one instant.
    CohortConflict,
    /// An instructor is booked twice at one instant.
    InstructorConflict,
    /// A room is booked twice at one instant.
    RoomConflict,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_unique<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {kind} ID: {id}"),
            ));
        }
    }
    seen
}

/// Validates catalog data before generation.
///
/// Checks:
/// 1. No duplicate batch, subject, faculty or room IDs
/// 2. Every subject a batch lists exists in the snapshot
/// 3. Every subject has a positive weekly quota
pub fn validate_catalog(snapshot: &CatalogSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(
        "batch",
        snapshot.batches.iter().map(|b| b.id.as_str()),
        &mut errors,
    );
    let subject_ids = check_unique(
        "subject",
        snapshot.subjects.iter().map(|s| s.id.as_str()),
        &mut errors,
    );
    check_unique(
        "faculty",
        snapshot.faculty.iter().map(|f| f.id.as_str()),
        &mut errors,
    );
    check_unique(
        "room",
        snapshot.rooms.iter().map(|r| r.id.as_str()),
        &mut errors,
    );

    for batch in &snapshot.batches {
        for sid in &batch.subject_ids {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Batch '{}' references unknown subject '{}'", batch.id, sid),
                ));
            }
        }
    }

    for subject in &snapshot.subjects {
        if subject.hours_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroHours,
                format!("Subject '{}' has no weekly hours", subject.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the double-booking invariants over a list of entries.
pub fn validate_entries(entries: &[ScheduleEntry]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut cohorts: HashSet<(Weekday, &str, &str)> = HashSet::new();
    let mut instructors: HashSet<(Weekday, &str, &str)> = HashSet::new();
    let mut rooms: HashSet<(Weekday, &str, &str)> = HashSet::new();

    for e in entries {
        let at = (e.day, e.start_time.as_str());
        if !cohorts.insert((at.0, at.1, e.cohort_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CohortConflict,
                format!("Cohort '{}' double-booked {} {}", e.cohort_id, e.day, e.start_time),
            ));
        }
        if !instructors.insert((at.0, at.1, e.instructor_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InstructorConflict,
                format!(
                    "Instructor '{}' double-booked {} {}",
                    e.instructor_id, e.day, e.start_time
                ),
            ));
        }
        if !rooms.insert((at.0, at.1, e.room_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::RoomConflict,
                format!("Room '{}' double-booked {} {}", e.room_id, e.day, e.start_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the double-booking invariants of a timetable.
pub fn validate_timetable(timetable: &Timetable) -> ValidationResult {
    validate_entries(timetable.entries())
}
