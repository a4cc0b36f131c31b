use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use u_timetable::catalog::InMemoryCatalog;
use u_timetable::config::GeneratorConfig;
use u_timetable::models::{Room, Timetable};
use u_timetable::scheduler::{CoverageReport, SLOT_COUNT};
use u_timetable::seed::{self, DEPARTMENT, SEMESTER};
use u_timetable::service::TimetableService;
use u_timetable::store::InMemoryTimetableStore;
use u_timetable::validation::validate_timetable;
use u_timetable::TimetableError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn seeded_service(rng_seed: u64) -> TimetableService<InMemoryCatalog, InMemoryTimetableStore> {
    let catalog = InMemoryCatalog::new();
    seed::populate(&catalog).await;
    TimetableService::with_rng(
        catalog,
        InMemoryTimetableStore::new(),
        StdRng::seed_from_u64(rng_seed),
    )
}

fn assert_no_double_booking(t: &Timetable) {
    let mut cohorts = HashSet::new();
    let mut instructors = HashSet::new();
    let mut rooms = HashSet::new();
    for e in t.entries() {
        assert!(cohorts.insert((e.day, e.start_time.clone(), e.cohort_id.clone())));
        assert!(instructors.insert((e.day, e.start_time.clone(), e.instructor_id.clone())));
        assert!(rooms.insert((e.day, e.start_time.clone(), e.room_id.clone())));
    }
}

#[tokio::test]
async fn sample_catalog_generates_conflict_free_timetable() {
    init_tracing();
    let sample = seed::sample_catalog();

    for s in 0..10 {
        let svc = seeded_service(s).await;
        let t = svc.generate(DEPARTMENT, SEMESTER).await.unwrap();

        assert_eq!(t.name, "Computer Science - Semester 3 Timetable");
        assert!(validate_timetable(&t).is_ok());
        assert_no_double_booking(&t);

        for batch in &sample.batches {
            for subject in &sample.subjects {
                assert!(t.hours_assigned(&batch.id, &subject.id) <= subject.hours_per_week);
            }
        }

        let report = CoverageReport::calculate(&t, &sample);
        assert_eq!(report.required_hours, 32);
        assert_eq!(report.assigned_hours as usize, t.entry_count());
    }
}

#[tokio::test]
async fn lab_subject_only_uses_laboratories() {
    let svc = seeded_service(3).await;
    let t = svc.generate(DEPARTMENT, SEMESTER).await.unwrap();

    for e in t.entries() {
        if e.subject_id == "cs203" {
            assert_eq!(e.room_id, "lab-a");
            assert_eq!(e.instructor_id, "fac-johnson");
        } else {
            assert_eq!(e.room_id, "room-101");
        }
    }
}

#[tokio::test]
async fn entries_follow_batch_then_subject_order() {
    let svc = seeded_service(8).await;
    let t = svc.generate(DEPARTMENT, SEMESTER).await.unwrap();

    let first_b = t
        .entries()
        .iter()
        .position(|e| e.cohort_id == "cs-3b")
        .unwrap_or(t.entry_count());
    assert!(t.entries()[..first_b].iter().all(|e| e.cohort_id == "cs-3a"));
    assert!(t.entries()[first_b..].iter().all(|e| e.cohort_id == "cs-3b"));

    for window in t.entries().windows(2) {
        let (a, b) = (&window[0], &window[1]);
        if a.cohort_id == b.cohort_id && a.subject_id == b.subject_id {
            assert!(a.slot_number < b.slot_number);
            assert!((b.slot_number as usize) <= SLOT_COUNT);
        }
    }
}

async fn catalog_with_rooms(rooms: Vec<Room>) -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    let sample = seed::sample_catalog();
    for room in rooms {
        catalog.add_room(room).await;
    }
    for s in sample.subjects {
        catalog.add_subject(s).await;
    }
    for f in sample.faculty {
        catalog.add_faculty(f).await;
    }
    for b in sample.batches {
        catalog.add_batch(b).await;
    }
    catalog
}

#[tokio::test]
async fn no_laboratory_means_silent_lab_shortfall() {
    let rooms = seed::sample_catalog()
        .rooms
        .into_iter()
        .filter(|r| !r.is_lab())
        .collect();
    let svc = TimetableService::with_config(
        catalog_with_rooms(rooms).await,
        InMemoryTimetableStore::new(),
        &GeneratorConfig::new().with_seed(5),
    );

    let t = svc.generate(DEPARTMENT, SEMESTER).await.unwrap();
    assert!(t.entries().iter().all(|e| e.subject_id != "cs203"));
    assert!(!t.is_empty());
}

#[tokio::test]
async fn unavailable_rooms_are_never_booked() {
    let mut rooms = vec![Room::classroom("closed").with_available(false)];
    rooms.extend(seed::sample_catalog().rooms);
    let svc = TimetableService::with_rng(
        catalog_with_rooms(rooms).await,
        InMemoryTimetableStore::new(),
        StdRng::seed_from_u64(1),
    );

    let t = svc.generate(DEPARTMENT, SEMESTER).await.unwrap();
    assert!(t.entries().iter().all(|e| e.room_id != "closed"));
    assert!(t.entries().iter().any(|e| e.room_id == "room-101"));
}

#[tokio::test]
async fn concurrent_requests_each_persist() {
    let svc = seeded_service(11).await;
    let (a, b) = tokio::join!(
        svc.generate(DEPARTMENT, SEMESTER),
        svc.generate(DEPARTMENT, SEMESTER)
    );
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a.id, b.id);
    assert_no_double_booking(&a);
    assert_no_double_booking(&b);
    assert_eq!(svc.timetables().await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_catalog_is_client_error() {
    let svc = TimetableService::with_rng(
        InMemoryCatalog::new(),
        InMemoryTimetableStore::new(),
        StdRng::seed_from_u64(0),
    );
    let err = svc.generate(DEPARTMENT, SEMESTER).await.unwrap_err();
    assert!(matches!(err, TimetableError::InsufficientData { missing: "batches", .. }));
    assert!(err.is_client_error());
    assert!(svc.timetables().await.unwrap().is_empty());
}

#[tokio::test]
async fn student_view_after_activation() {
    let svc = seeded_service(21).await;
    let t = svc.generate(DEPARTMENT, SEMESTER).await.unwrap();
    svc.set_active(&t.id, true).await.unwrap();

    let view = svc.batch_timetable("cs-3a").await.unwrap();
    assert_eq!(view.batch.name, "CS-3A");
    assert_eq!(view.entries.len(), t.entries_for_cohort("cs-3a").len());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["timetable_id"], t.id.as_str());
}
