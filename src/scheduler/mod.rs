//! Timetable generation engine.
//!
//! # Pipeline
//!
//! `SlotGrid` fixes the 36-slot weekly universe. `Assigner` walks cohorts
//! and subjects, delegating slot choice to a [`SlotStrategy`] that consults
//! `ConflictTracker` before every commit. `Assembler` wraps the committed
//! entries into a `Timetable`. `CoverageReport` measures quota fill.
//!
//! The default strategy is a single greedy pass with one (instructor, room)
//! attempt per slot. It does not backtrack and accepts under-provisioned
//! results.

mod assembler;
mod assigner;
mod conflict;
mod grid;
mod kpi;
mod strategy;

pub use assembler::{timetable_name, Assembler};
pub use assigner::{Assigner, CatalogSnapshot};
pub use conflict::ConflictTracker;
pub use grid::{SlotGrid, DAILY_INTERVALS, SLOT_COUNT};
pub use kpi::{CoverageReport, SubjectCoverage};
pub use strategy::{select_room, PlacementRequest, SingleAttempt, SlotStrategy};
