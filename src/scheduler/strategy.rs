//! Slot-selection strategies.
//!
//! A strategy decides, for one (cohort, subject) pair, which slots to try
//! and which (instructor, room) combination to offer the conflict tracker
//! on each. The data model and [`ConflictTracker`] do not depend on it.

use std::fmt::Debug;

use rand::prelude::IndexedRandom;
use rand::RngCore;

use super::ConflictTracker;
use crate::models::{Batch, Faculty, Room, ScheduleEntry, Subject, TimeSlot};

/// Everything a strategy needs to place one subject for one cohort.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest<'a> {
    pub cohort: &'a Batch,
    pub subject: &'a Subject,
    /// Faculty qualified for the subject. Never empty.
    pub eligible: &'a [&'a Faculty],
    /// Available rooms in catalog order.
    pub rooms: &'a [Room],
    /// Slot grid in fixed order.
    pub slots: &'a [TimeSlot],
}

/// Places the weekly hours of a subject into the committed set.
pub trait SlotStrategy: Send + Sync + Debug {
    /// Strategy name.
    fn name(&self) -> &'static str;

    /// Appends up to `subject.hours_per_week` entries to `committed` and
    /// returns how many were placed. Existing entries are never touched.
    fn place(
        &self,
        request: PlacementRequest<'_>,
        committed: &mut Vec<ScheduleEntry>,
        rng: &mut dyn RngCore,
    ) -> u32;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// First room fit for the subject: the first laboratory when a lab is
/// required, otherwise the first room of any type.
pub fn select_room(rooms: &[Room], requires_lab: bool) -> Option<&Room> {
    if requires_lab {
        rooms.iter().find(|r| r.is_lab())
    } else {
        rooms.first()
    }
}

/// One (instructor, room) attempt per slot, no retries.
///
/// Walks the grid in order. On every slot it draws an instructor uniformly
/// from the eligible set, takes the first fitting room and commits if the
/// tuple is free. A collision skips the slot; no alternate instructor or
/// room is tried, so a subject can end short even when a feasible
/// placement exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleAttempt;

impl SlotStrategy for SingleAttempt {
    fn name(&self) -> &'static str {
        "SINGLE_ATTEMPT"
    }

    fn place(
        &self,
        request: PlacementRequest<'_>,
        committed: &mut Vec<ScheduleEntry>,
        rng: &mut dyn RngCore,
    ) -> u32 {
        let target = request.subject.hours_per_week;
        let mut assigned = 0;

        for slot in request.slots {
            if assigned >= target {
                break;
            }

            // Independent draw per slot attempt
            let Some(instructor) = request.eligible.choose(&mut *rng) else {
                break;
            };
            let Some(room) = select_room(request.rooms, request.subject.requires_lab) else {
                continue;
            };

            if ConflictTracker::is_available(
                committed.as_slice(),
                &request.cohort.id,
                &instructor.id,
                &room.id,
                slot,
            ) {
                committed.push(ScheduleEntry::commit(
                    &request.cohort.id,
                    &request.subject.id,
                    &instructor.id,
                    &room.id,
                    slot,
                ));
                assigned += 1;
            }
        }

        assigned
    }

    fn description(&self) -> &'static str {
        "Single random instructor and first fitting room per slot"
    }
}
