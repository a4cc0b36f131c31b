//! Timetable coverage metrics.
//!
//! Measures how far a generated timetable meets the weekly hour quotas of
//! its catalog. The greedy pass may under-provision; this report makes the
//! gap visible without changing the algorithm.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required hours | Sum of quotas over (cohort, subject) pairs |
//! | Assigned hours | Committed entries |
//! | Fill rate | assigned / required |
//! | Shortfalls | Pairs with assigned < required |
//! | Room usage | Entries per room / grid size |

use std::collections::HashMap;

use super::grid::SLOT_COUNT;
use super::CatalogSnapshot;
use crate::models::Timetable;

/// Coverage of one (cohort, subject) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCoverage {
    pub cohort_id: String,
    pub subject_id: String,
    pub required_hours: u32,
    pub assigned_hours: u32,
}

impl SubjectCoverage {
    /// Hours still missing.
    #[inline]
    pub fn missing_hours(&self) -> u32 {
        self.required_hours.saturating_sub(self.assigned_hours)
    }

    /// Whether the quota is met.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.assigned_hours >= self.required_hours
    }
}

/// Quota coverage for a generated timetable.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Per-pair coverage in batch-major, subject-major order.
    pub subjects: Vec<SubjectCoverage>,
    pub required_hours: u64,
    pub assigned_hours: u64,
    /// assigned / required (1.0 when nothing is required).
    pub fill_rate: f64,
    /// Share of grid slots each room is booked (0.0..1.0).
    pub room_usage: HashMap<String, f64>,
}

impl CoverageReport {
    /// Computes coverage of `timetable` against the catalog it was built from.
    pub fn calculate(timetable: &Timetable, snapshot: &CatalogSnapshot) -> Self {
        let mut subjects = Vec::new();
        let mut required_hours: u64 = 0;
        let mut assigned_hours: u64 = 0;

        for batch in &snapshot.batches {
            for subject in snapshot.subjects_of(batch) {
                let assigned = timetable.hours_assigned(&batch.id, &subject.id);
                required_hours += u64::from(subject.hours_per_week);
                assigned_hours += u64::from(assigned);
                subjects.push(SubjectCoverage {
                    cohort_id: batch.id.clone(),
                    subject_id: subject.id.clone(),
                    required_hours: subject.hours_per_week,
                    assigned_hours: assigned,
                });
            }
        }

        let fill_rate = if required_hours == 0 {
            1.0
        } else {
            assigned_hours as f64 / required_hours as f64
        };

        let mut booked: HashMap<String, usize> = HashMap::new();
        for e in timetable.entries() {
            *booked.entry(e.room_id.clone()).or_insert(0) += 1;
        }
        let room_usage = booked
            .into_iter()
            .map(|(id, n)| (id, n as f64 / SLOT_COUNT as f64))
            .collect();

        Self {
            subjects,
            required_hours,
            assigned_hours,
            fill_rate,
            room_usage,
        }
    }

    /// Pairs that ended under quota.
    pub fn shortfalls(&self) -> Vec<&SubjectCoverage> {
        self.subjects.iter().filter(|c| !c.is_complete()).collect()
    }

    /// Whether every quota was met.
    pub fn is_complete(&self) -> bool {
        self.subjects.iter().all(SubjectCoverage::is_complete)
    }

    /// Whether the fill rate reaches a threshold.
    pub fn meets_threshold(&self, min_fill_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate
    }
}
