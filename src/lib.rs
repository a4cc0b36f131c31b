//! Weekly academic timetable generation.
//!
//! Assigns subjects to the slots of a fixed weekly grid for student
//! cohorts, choosing a qualified instructor and a suitable room for each
//! hour, without double-booking any cohort, instructor or room.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Batch`, `Subject`, `Faculty`, `Room`,
//!   `TimeSlot`, `ScheduleEntry`, `Timetable`
//! - **`scheduler`**: Slot grid, conflict tracker, greedy assigner,
//!   assembler and coverage report
//! - **`validation`**: Catalog integrity and double-booking checks
//! - **`catalog`** / **`store`**: Collaborator traits with in-memory
//!   implementations
//! - **`service`**: Generation and lookup boundary
//!
//! # Algorithm
//!
//! A single greedy pass: one random instructor and the first fitting room
//! per slot, no retries and no backtracking. Under-provisioned results are
//! ordinary output; see [`scheduler::CoverageReport`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{CatalogError, Result, TimetableError};
