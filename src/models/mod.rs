//! Timetabling domain models.
//!
//! # Domain Mappings
//!
//! | u-timetable | Scheduling term | Campus term |
//! |-------------|-----------------|-------------|
//! | Batch | Task group | Student cohort |
//! | Faculty | Human resource | Instructor |
//! | Room | Primary resource | Classroom / lab |
//! | TimeSlot | Time bucket | Lecture hour |
//! | Timetable | Schedule | Weekly timetable |

mod catalog;
mod slot;
mod timetable;

pub use catalog::{Batch, Faculty, Room, RoomType, Subject, SubjectType};
pub use slot::{TimeSlot, Weekday};
pub use timetable::{ScheduleEntry, Timetable};
