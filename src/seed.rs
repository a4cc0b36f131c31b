//! Demonstration catalog.
//!
//! One Computer Science semester-3 cohort pair with five subjects, four
//! instructors and five rooms. Ids are fixed so runs can be compared.

use crate::catalog::InMemoryCatalog;
use crate::models::{Batch, Faculty, Room, RoomType, Subject, SubjectType};
use crate::scheduler::CatalogSnapshot;

pub const DEPARTMENT: &str = "Computer Science";
pub const SEMESTER: u32 = 3;

/// Builds the sample records (rooms listed regardless of availability).
pub fn sample_catalog() -> CatalogSnapshot {
    let rooms = vec![
        Room::classroom("room-101")
            .with_name("Room 101")
            .with_capacity(60),
        Room::classroom("room-102")
            .with_name("Room 102")
            .with_capacity(40),
        Room::laboratory("lab-a")
            .with_name("Lab A")
            .with_capacity(30)
            .with_equipment("Computers")
            .with_equipment("Projector"),
        Room::laboratory("lab-b")
            .with_name("Lab B")
            .with_capacity(25)
            .with_equipment("Equipment")
            .with_equipment("Projector"),
        Room::new("auditorium", RoomType::Auditorium)
            .with_name("Auditorium")
            .with_capacity(200)
            .with_equipment("Sound System")
            .with_equipment("Projector"),
    ];

    let subjects = vec![
        Subject::new("cs201", DEPARTMENT, SEMESTER, 4)
            .with_name("Data Structures")
            .with_code("CS201"),
        Subject::new("cs202", DEPARTMENT, SEMESTER, 3)
            .with_name("Database Management")
            .with_code("CS202"),
        Subject::new("cs203", DEPARTMENT, SEMESTER, 2)
            .with_name("Programming Lab")
            .with_code("CS203")
            .with_type(SubjectType::Practical)
            .with_lab(true),
        Subject::new("ma201", DEPARTMENT, SEMESTER, 4)
            .with_name("Mathematics III")
            .with_code("MA201"),
        Subject::new("cs204", DEPARTMENT, SEMESTER, 3)
            .with_name("Software Engineering")
            .with_code("CS204"),
    ];
    let subject_ids: Vec<String> = subjects.iter().map(|s| s.id.clone()).collect();

    let faculty = vec![
        Faculty::new("fac-smith", DEPARTMENT)
            .with_name("Dr. John Smith")
            .with_subjects(subject_ids[..2].to_vec())
            .with_limits(6, 24),
        Faculty::new("fac-johnson", DEPARTMENT)
            .with_name("Prof. Sarah Johnson")
            .with_subjects(subject_ids[1..3].to_vec())
            .with_limits(5, 20),
        Faculty::new("fac-wilson", DEPARTMENT)
            .with_name("Dr. Mike Wilson")
            .with_subjects(vec![subject_ids[0].clone(), subject_ids[3].clone()])
            .with_limits(6, 25),
        Faculty::new("fac-davis", DEPARTMENT)
            .with_name("Prof. Emily Davis")
            .with_subjects(subject_ids[3..].to_vec())
            .with_limits(5, 22),
    ];

    let batches = vec![
        Batch::new("cs-3a", DEPARTMENT, SEMESTER)
            .with_name("CS-3A")
            .with_student_count(45)
            .with_subjects(subject_ids.clone()),
        Batch::new("cs-3b", DEPARTMENT, SEMESTER)
            .with_name("CS-3B")
            .with_student_count(42)
            .with_subjects(subject_ids),
    ];

    CatalogSnapshot::new(batches, subjects, faculty, rooms)
}

/// Replaces the contents of `catalog` with the sample records.
pub async fn populate(catalog: &InMemoryCatalog) {
    catalog.clear().await;
    let sample = sample_catalog();
    for room in sample.rooms {
        catalog.add_room(room).await;
    }
    for subject in sample.subjects {
        catalog.add_subject(subject).await;
    }
    for faculty in sample.faculty {
        catalog.add_faculty(faculty).await;
    }
    for batch in sample.batches {
        catalog.add_batch(batch).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fetch_snapshot, FETCH_LIMIT};
    use crate::validation::validate_catalog;

    #[test]
    fn test_sample_is_valid() {
        let snap = sample_catalog();
        assert!(validate_catalog(&snap).is_ok());
        assert_eq!(snap.rooms.len(), 5);
        assert_eq!(snap.subjects.len(), 5);
        assert_eq!(snap.faculty.len(), 4);
        assert_eq!(snap.batches.len(), 2);
        assert_eq!(snap.rooms.iter().filter(|r| r.is_lab()).count(), 2);
    }

    #[test]
    fn test_every_subject_has_faculty() {
        let snap = sample_catalog();
        for s in &snap.subjects {
            assert!(!snap.eligible_faculty(&s.id).is_empty(), "{}", s.id);
        }
    }

    #[tokio::test]
    async fn test_populate_replaces() {
        let catalog = InMemoryCatalog::new();
        catalog.add_room(Room::classroom("stale")).await;
        populate(&catalog).await;
        populate(&catalog).await;

        let snap = fetch_snapshot(&catalog, DEPARTMENT, SEMESTER, FETCH_LIMIT)
            .await
            .unwrap();
        assert_eq!(snap.rooms.len(), 5);
        assert_eq!(snap.batches.len(), 2);
        assert!(snap.rooms.iter().all(|r| r.id != "stale"));
    }
}
