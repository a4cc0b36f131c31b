//! Catalog records consumed read-only by the generator.
//!
//! Batches (cohorts), subjects, faculty and rooms. Descriptive fields
//! (names, capacities, workload limits) travel with the records but the
//! assignment algorithm reads only ids, department/semester, subject
//! lists, hour quotas, the lab flag and room type.

use serde::{Deserialize, Serialize};

/// A student cohort sharing department, semester and subject list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier.
    pub id: String,
    /// Human-readable name (e.g. "CS-3A").
    pub name: String,
    /// Owning department.
    pub department: String,
    /// Semester number.
    pub semester: u32,
    /// Number of enrolled students.
    pub student_count: u32,
    /// Subjects this batch takes, by id.
    pub subject_ids: Vec<String>,
}

/// Teaching mode of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectType {
    Theory,
    Practical,
    Tutorial,
}

/// A course with a weekly hour quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Short catalog code (e.g. "CS201").
    pub code: String,
    pub department: String,
    pub semester: u32,
    pub subject_type: SubjectType,
    /// Hours to place per week.
    pub hours_per_week: u32,
    /// Whether every hour must be held in a laboratory.
    pub requires_lab: bool,
    /// Faculty recorded against the subject. Eligibility is decided from
    /// the faculty side (`Faculty::subject_ids`), not from this list.
    pub faculty_ids: Vec<String>,
}

/// An instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub department: String,
    /// Subjects this instructor may teach.
    pub subject_ids: Vec<String>,
    pub max_hours_per_day: u32,
    pub max_hours_per_week: u32,
}

/// Room classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Classroom,
    Laboratory,
    Auditorium,
    /// Site-specific type.
    Custom(String),
}

/// A physical teaching space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub room_type: RoomType,
    pub equipment: Vec<String>,
    /// Unavailable rooms are never returned by catalog room queries.
    pub available: bool,
}

impl Batch {
    /// Creates a batch with no subjects.
    pub fn new(id: impl Into<String>, department: impl Into<String>, semester: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: department.into(),
            semester,
            student_count: 0,
            subject_ids: Vec::new(),
        }
    }

    /// Sets the batch name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the student count.
    pub fn with_student_count(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    /// Adds a subject to the batch.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Replaces the subject list.
    pub fn with_subjects(mut self, subject_ids: Vec<String>) -> Self {
        self.subject_ids = subject_ids;
        self
    }

    /// Whether the batch takes a subject.
    pub fn takes(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
    }
}

impl Subject {
    /// Creates a theory subject with the given weekly quota.
    pub fn new(
        id: impl Into<String>,
        department: impl Into<String>,
        semester: u32,
        hours_per_week: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            department: department.into(),
            semester,
            subject_type: SubjectType::Theory,
            hours_per_week,
            requires_lab: false,
            faculty_ids: Vec::new(),
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the catalog code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the teaching mode.
    pub fn with_type(mut self, subject_type: SubjectType) -> Self {
        self.subject_type = subject_type;
        self
    }

    /// Marks the subject as laboratory-only.
    pub fn with_lab(mut self, requires_lab: bool) -> Self {
        self.requires_lab = requires_lab;
        self
    }
}

impl Faculty {
    /// Creates an instructor with default limits (6 h/day, 30 h/week).
    pub fn new(id: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: department.into(),
            subject_ids: Vec::new(),
            max_hours_per_day: 6,
            max_hours_per_week: 30,
        }
    }

    /// Sets the instructor name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a teachable subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Replaces the teachable subject list.
    pub fn with_subjects(mut self, subject_ids: Vec<String>) -> Self {
        self.subject_ids = subject_ids;
        self
    }

    /// Sets workload limits. Recorded only; the generator does not balance load.
    pub fn with_limits(mut self, per_day: u32, per_week: u32) -> Self {
        self.max_hours_per_day = per_day;
        self.max_hours_per_week = per_week;
        self
    }

    /// Whether this instructor may teach a subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
    }
}

impl Room {
    /// Creates an available room.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            room_type,
            equipment: Vec::new(),
            available: true,
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Classroom)
    }

    /// Creates a laboratory.
    pub fn laboratory(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Laboratory)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds a piece of equipment.
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Sets the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Whether this room is a laboratory.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.room_type == RoomType::Laboratory
    }
}
