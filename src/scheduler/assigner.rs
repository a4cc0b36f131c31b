//! Greedy timetable assigner.
//!
//! # Algorithm
//!
//! 1. Reject the request if batches, subjects, faculty or rooms is empty.
//! 2. For each batch (catalog order), for each of its subjects (catalog
//!    order), collect the faculty qualified to teach the subject.
//! 3. Skip the subject silently when nobody is qualified.
//! 4. Otherwise hand the subject to the slot strategy, which walks the
//!    36-slot grid and commits entries into the shared committed set.
//!
//! Committed entries are permanent for the run, so every conflict
//! invariant holds incrementally. Shortfalls are reported through logs,
//! never as errors.
//!
//! # Complexity
//! O(b · s · (f + 36 · e)) where b=batches, s=subjects, f=faculty,
//! e=entries committed so far.

use std::sync::Arc;

use rand::RngCore;
use tracing::{debug, info, warn};

use super::{PlacementRequest, SingleAttempt, SlotGrid, SlotStrategy};
use crate::error::{Result, TimetableError};
use crate::models::{Batch, Faculty, Room, ScheduleEntry, Subject, TimeSlot};

/// Catalog data for one department/semester, already filtered by the
/// caller: batches and subjects by department+semester, faculty by
/// department, rooms by availability.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub batches: Vec<Batch>,
    pub subjects: Vec<Subject>,
    pub faculty: Vec<Faculty>,
    pub rooms: Vec<Room>,
}

impl CatalogSnapshot {
    /// Creates a snapshot from the four collections.
    pub fn new(
        batches: Vec<Batch>,
        subjects: Vec<Subject>,
        faculty: Vec<Faculty>,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            batches,
            subjects,
            faculty,
            rooms,
        }
    }

    /// Fails with `InsufficientData` naming the first empty collection.
    pub fn ensure_complete(&self, department: &str, semester: u32) -> Result<()> {
        let missing = if self.batches.is_empty() {
            Some("batches")
        } else if self.subjects.is_empty() {
            Some("subjects")
        } else if self.faculty.is_empty() {
            Some("faculty")
        } else if self.rooms.is_empty() {
            Some("rooms")
        } else {
            None
        };

        match missing {
            Some(missing) => Err(TimetableError::InsufficientData {
                department: department.to_string(),
                semester,
                missing,
            }),
            None => Ok(()),
        }
    }

    /// Subjects taken by a batch, in catalog order.
    pub fn subjects_of<'a>(&'a self, batch: &'a Batch) -> impl Iterator<Item = &'a Subject> {
        self.subjects.iter().filter(move |s| batch.takes(&s.id))
    }

    /// Faculty qualified for a subject, in catalog order.
    pub fn eligible_faculty(&self, subject_id: &str) -> Vec<&Faculty> {
        self.faculty.iter().filter(|f| f.teaches(subject_id)).collect()
    }
}

/// Runs the greedy allocation pass for one department/semester.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_timetable::models::{Batch, Faculty, Room, Subject};
/// use u_timetable::scheduler::{Assigner, CatalogSnapshot};
///
/// let snapshot = CatalogSnapshot::new(
///     vec![Batch::new("B1", "CS", 3).with_subject("S1")],
///     vec![Subject::new("S1", "CS", 3, 2)],
///     vec![Faculty::new("F1", "CS").with_subject("S1")],
///     vec![Room::classroom("R1")],
/// );
/// let mut rng = StdRng::seed_from_u64(42);
/// let entries = Assigner::new().assign("CS", 3, &snapshot, &mut rng).unwrap();
/// assert_eq!(entries.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Assigner {
    strategy: Arc<dyn SlotStrategy>,
    slots: &'static [TimeSlot],
}

impl Assigner {
    /// Creates an assigner with the single-attempt strategy on the standard grid.
    pub fn new() -> Self {
        Self {
            strategy: Arc::new(SingleAttempt),
            slots: SlotGrid::standard(),
        }
    }

    /// Replaces the slot-selection strategy.
    pub fn with_strategy<S: SlotStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// Shares an existing strategy.
    pub fn with_shared_strategy(mut self, strategy: Arc<dyn SlotStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Active strategy name.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Produces the committed entries, batch-major, subject-major, slot-minor.
    ///
    /// # Errors
    /// `InsufficientData` if any snapshot collection is empty. Nothing is
    /// produced in that case.
    pub fn assign(
        &self,
        department: &str,
        semester: u32,
        snapshot: &CatalogSnapshot,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ScheduleEntry>> {
        snapshot.ensure_complete(department, semester)?;

        let mut committed: Vec<ScheduleEntry> = Vec::new();
        let mut shortfalls = 0usize;

        for batch in &snapshot.batches {
            for subject in snapshot.subjects_of(batch) {
                let eligible = snapshot.eligible_faculty(&subject.id);
                if eligible.is_empty() {
                    debug!(
                        batch = %batch.id,
                        subject = %subject.id,
                        "no qualified faculty, subject skipped"
                    );
                    shortfalls += 1;
                    continue;
                }

                let placed = self.strategy.place(
                    PlacementRequest {
                        cohort: batch,
                        subject,
                        eligible: &eligible,
                        rooms: &snapshot.rooms,
                        slots: self.slots,
                    },
                    &mut committed,
                    rng,
                );

                if placed < subject.hours_per_week {
                    shortfalls += 1;
                    warn!(
                        batch = %batch.id,
                        subject = %subject.id,
                        required = subject.hours_per_week,
                        assigned = placed,
                        "subject under-provisioned"
                    );
                }
            }
        }

        info!(
            department,
            semester,
            strategy = self.strategy.name(),
            entries = committed.len(),
            shortfalls,
            "assignment pass complete"
        );

        Ok(committed)
    }
}

impl Default for Assigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomType, Timetable};
    use crate::validation::validate_entries;
    use chrono::Utc;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    fn scenario_a() -> CatalogSnapshot {
        CatalogSnapshot::new(
            vec![Batch::new("B1", "CS", 3).with_subject("S1")],
            vec![Subject::new("S1", "CS", 3, 2)],
            vec![Faculty::new("F1", "CS").with_subject("S1")],
            vec![Room::classroom("R1"), Room::classroom("R2")],
        )
    }

    #[test]
    fn test_scenario_a_two_hours() {
        let entries = Assigner::new()
            .assign("CS", 3, &scenario_a(), &mut rng(42))
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.cohort_id == "B1"
            && e.subject_id == "S1"
            && e.instructor_id == "F1"
            && (e.room_id == "R1" || e.room_id == "R2")));
        assert_ne!(
            (entries[0].day, &entries[0].start_time),
            (entries[1].day, &entries[1].start_time)
        );
    }

    #[test]
    fn test_scenario_b_no_lab_silent_shortfall() {
        let snapshot = CatalogSnapshot::new(
            vec![Batch::new("B1", "CS", 3).with_subjects(vec!["S1".into(), "S2".into()])],
            vec![
                Subject::new("S1", "CS", 3, 2),
                Subject::new("S2", "CS", 3, 2).with_lab(true),
            ],
            vec![Faculty::new("F1", "CS").with_subjects(vec!["S1".into(), "S2".into()])],
            vec![
                Room::classroom("R1"),
                Room::new("A1", RoomType::Auditorium),
            ],
        );

        let entries = Assigner::new().assign("CS", 3, &snapshot, &mut rng(5)).unwrap();
        assert!(entries.iter().all(|e| e.subject_id != "S2"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_collections_rejected() {
        let full = scenario_a();
        let cases: [(&str, fn(&mut CatalogSnapshot)); 4] = [
            ("batches", |s| s.batches.clear()),
            ("subjects", |s| s.subjects.clear()),
            ("faculty", |s| s.faculty.clear()),
            ("rooms", |s| s.rooms.clear()),
        ];

        for (name, clear) in cases {
            let mut snapshot = full.clone();
            clear(&mut snapshot);
            let err = Assigner::new()
                .assign("CS", 3, &snapshot, &mut rng(0))
                .unwrap_err();
            match err {
                TimetableError::InsufficientData { missing, .. } => assert_eq!(missing, name),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_subject_without_faculty_skipped() {
        let mut snapshot = scenario_a();
        snapshot.batches[0].subject_ids.push("S9".into());
        snapshot.subjects.push(Subject::new("S9", "CS", 3, 4));

        let entries = Assigner::new().assign("CS", 3, &snapshot, &mut rng(9)).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.subject_id == "S1"));
    }

    #[test]
    fn test_subject_not_in_catalog_ignored() {
        let mut snapshot = scenario_a();
        snapshot.batches[0].subject_ids.push("GHOST".into());
        let entries = Assigner::new().assign("CS", 3, &snapshot, &mut rng(2)).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_order_batch_then_subject_then_slot() {
        let snapshot = CatalogSnapshot::new(
            vec![
                Batch::new("B1", "CS", 3).with_subjects(vec!["S1".into(), "S2".into()]),
                Batch::new("B2", "CS", 3).with_subjects(vec!["S1".into()]),
            ],
            // Catalog order S2 before S1 wins over batch subject order
            vec![Subject::new("S2", "CS", 3, 1), Subject::new("S1", "CS", 3, 1)],
            vec![
                Faculty::new("F1", "CS").with_subject("S1"),
                Faculty::new("F2", "CS").with_subject("S2"),
            ],
            vec![Room::classroom("R1")],
        );

        let entries = Assigner::new().assign("CS", 3, &snapshot, &mut rng(11)).unwrap();
        let order: Vec<(&str, &str, u32)> = entries
            .iter()
            .map(|e| (e.cohort_id.as_str(), e.subject_id.as_str(), e.slot_number))
            .collect();
        // Single room forces every entry onto a distinct slot
        assert_eq!(order, vec![("B1", "S2", 1), ("B1", "S1", 2), ("B2", "S1", 3)]);
    }

    #[test]
    fn test_quota_never_exceeded() {
        let snapshot = CatalogSnapshot::new(
            vec![Batch::new("B1", "CS", 3).with_subject("S1")],
            vec![Subject::new("S1", "CS", 3, 40)],
            vec![Faculty::new("F1", "CS").with_subject("S1")],
            vec![Room::classroom("R1")],
        );
        let entries = Assigner::new().assign("CS", 3, &snapshot, &mut rng(1)).unwrap();
        // Quota above the grid size saturates at 36
        assert_eq!(entries.len(), 36);
    }

    #[test]
    fn test_zero_hours_places_nothing() {
        let mut snapshot = scenario_a();
        snapshot.subjects[0].hours_per_week = 0;
        let entries = Assigner::new().assign("CS", 3, &snapshot, &mut rng(1)).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_seeded_runs_repeat_choices() {
        let snapshot = CatalogSnapshot::new(
            vec![
                Batch::new("B1", "CS", 3).with_subjects(vec!["S1".into(), "S2".into()]),
                Batch::new("B2", "CS", 3).with_subjects(vec!["S1".into(), "S2".into()]),
            ],
            vec![Subject::new("S1", "CS", 3, 4), Subject::new("S2", "CS", 3, 3)],
            vec![
                Faculty::new("F1", "CS").with_subjects(vec!["S1".into(), "S2".into()]),
                Faculty::new("F2", "CS").with_subjects(vec!["S1".into(), "S2".into()]),
                Faculty::new("F3", "CS").with_subject("S1"),
            ],
            vec![Room::classroom("R1"), Room::classroom("R2")],
        );

        fn key(entries: &[ScheduleEntry]) -> Vec<(String, String, String, u32)> {
            entries
                .iter()
                .map(|e| {
                    (
                        e.cohort_id.clone(),
                        e.subject_id.clone(),
                        e.instructor_id.clone(),
                        e.slot_number,
                    )
                })
                .collect()
        }

        let a = Assigner::new().assign("CS", 3, &snapshot, &mut rng(77)).unwrap();
        let b = Assigner::new().assign("CS", 3, &snapshot, &mut rng(77)).unwrap();
        assert_eq!(key(&a), key(&b));
    }

    #[test]
    fn test_invariants_hold_across_seeds() {
        let subject_ids: Vec<String> = (1..=5).map(|i| format!("S{i}")).collect();
        let snapshot = CatalogSnapshot::new(
            (1..=3)
                .map(|i| Batch::new(format!("B{i}"), "CS", 3).with_subjects(subject_ids.clone()))
                .collect(),
            (1..=5)
                .map(|i| Subject::new(format!("S{i}"), "CS", 3, 4).with_lab(i == 3))
                .collect(),
            vec![
                Faculty::new("F1", "CS").with_subjects(vec!["S1".into(), "S2".into()]),
                Faculty::new("F2", "CS").with_subjects(vec!["S2".into(), "S3".into()]),
                Faculty::new("F3", "CS").with_subjects(vec!["S1".into(), "S4".into()]),
                Faculty::new("F4", "CS").with_subjects(vec!["S4".into(), "S5".into()]),
            ],
            vec![
                Room::classroom("R1"),
                Room::classroom("R2"),
                Room::laboratory("L1"),
            ],
        );

        for seed in 0..25 {
            let entries = Assigner::new()
                .assign("CS", 3, &snapshot, &mut rng(seed))
                .unwrap();
            assert!(validate_entries(&entries).is_ok(), "seed {seed}");

            let t = Timetable::new("t", "CS", 3, entries, Utc::now());
            for b in &snapshot.batches {
                for s in &snapshot.subjects {
                    assert!(t.hours_assigned(&b.id, &s.id) <= s.hours_per_week);
                }
            }
        }
    }
}
