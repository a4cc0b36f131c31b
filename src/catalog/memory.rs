use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use super::{Catalog, FETCH_LIMIT};
use crate::config::GeneratorConfig;
use crate::error::CatalogError;
use crate::models::{Batch, Faculty, Room, Subject};

#[derive(Debug, Default)]
struct CatalogDb {
    batches: Vec<Batch>,
    subjects: Vec<Subject>,
    faculty: Vec<Faculty>,
    rooms: Vec<Room>,
}

/// In-process catalog keeping records in insertion order.
///
/// Cloning shares the underlying records.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<CatalogDb>>,
    limit: usize,
}

impl InMemoryCatalog {
    /// Creates an empty catalog capped at [`FETCH_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(FETCH_LIMIT)
    }

    /// Creates an empty catalog with a custom per-query cap.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogDb::default())),
            limit,
        }
    }

    /// Creates an empty catalog capped at the configured fetch limit.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_limit(config.fetch_limit)
    }

    /// Per-query record cap.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub async fn add_batch(&self, batch: Batch) {
        self.state.write().await.batches.push(batch);
    }

    pub async fn add_subject(&self, subject: Subject) {
        self.state.write().await.subjects.push(subject);
    }

    pub async fn add_faculty(&self, faculty: Faculty) {
        self.state.write().await.faculty.push(faculty);
    }

    pub async fn add_room(&self, room: Room) {
        self.state.write().await.rooms.push(room);
    }

    /// Removes every record.
    pub async fn clear(&self) {
        let mut guard = self.state.write().await;
        *guard = CatalogDb::default();
    }

    fn capped<T: Clone>(&self, kind: &str, matches: Vec<&T>) -> Vec<T> {
        if matches.len() > self.limit {
            warn!(
                kind,
                matched = matches.len(),
                limit = self.limit,
                "catalog query truncated at fetch limit"
            );
        }
        matches.into_iter().take(self.limit).cloned().collect()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn find_batches(
        &self,
        department: &str,
        semester: u32,
    ) -> Result<Vec<Batch>, CatalogError> {
        let guard = self.state.read().await;
        let matches = guard
            .batches
            .iter()
            .filter(|b| b.department == department && b.semester == semester)
            .collect();
        Ok(self.capped("batches", matches))
    }

    async fn find_subjects(
        &self,
        department: &str,
        semester: u32,
    ) -> Result<Vec<Subject>, CatalogError> {
        let guard = self.state.read().await;
        let matches = guard
            .subjects
            .iter()
            .filter(|s| s.department == department && s.semester == semester)
            .collect();
        Ok(self.capped("subjects", matches))
    }

    async fn find_faculty(&self, department: &str) -> Result<Vec<Faculty>, CatalogError> {
        let guard = self.state.read().await;
        let matches = guard
            .faculty
            .iter()
            .filter(|f| f.department == department)
            .collect();
        Ok(self.capped("faculty", matches))
    }

    async fn find_available_rooms(&self) -> Result<Vec<Room>, CatalogError> {
        let guard = self.state.read().await;
        let matches = guard.rooms.iter().filter(|r| r.available).collect();
        Ok(self.capped("rooms", matches))
    }

    async fn find_batch(&self, id: &str) -> Result<Option<Batch>, CatalogError> {
        let guard = self.state.read().await;
        Ok(guard.batches.iter().find(|b| b.id == id).cloned())
    }
}
