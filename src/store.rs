//! Timetable persistence collaborator.
//!
//! Generated timetables are appended as-is. Nothing is deduplicated:
//! repeated or concurrent generation for the same department and semester
//! stores one timetable per run. The store applies no activation policy;
//! `set_active` toggles exactly the flag it is asked to.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CatalogError;
use crate::models::Timetable;

/// Storage for generated timetables.
#[async_trait]
pub trait TimetableStore: Send + Sync {
    /// Appends a timetable.
    async fn insert(&self, timetable: Timetable) -> Result<(), CatalogError>;

    /// Looks up a timetable by id.
    async fn get(&self, id: &str) -> Result<Option<Timetable>, CatalogError>;

    /// All timetables in insertion order.
    async fn list(&self) -> Result<Vec<Timetable>, CatalogError>;

    /// Sets the active flag; returns the updated timetable if it exists.
    async fn set_active(&self, id: &str, active: bool) -> Result<Option<Timetable>, CatalogError>;

    /// Active timetables for a department and semester, in insertion order.
    async fn find_active(
        &self,
        department: &str,
        semester: u32,
    ) -> Result<Vec<Timetable>, CatalogError>;
}

/// In-process timetable store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTimetableStore {
    state: Arc<RwLock<Vec<Timetable>>>,
}

impl InMemoryTimetableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored timetables.
    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }
}

#[async_trait]
impl TimetableStore for InMemoryTimetableStore {
    async fn insert(&self, timetable: Timetable) -> Result<(), CatalogError> {
        self.state.write().await.push(timetable);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Timetable>, CatalogError> {
        let guard = self.state.read().await;
        Ok(guard.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Timetable>, CatalogError> {
        Ok(self.state.read().await.clone())
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<Option<Timetable>, CatalogError> {
        let mut guard = self.state.write().await;
        Ok(guard.iter_mut().find(|t| t.id == id).map(|t| {
            t.is_active = active;
            t.clone()
        }))
    }

    async fn find_active(
        &self,
        department: &str,
        semester: u32,
    ) -> Result<Vec<Timetable>, CatalogError> {
        let guard = self.state.read().await;
        Ok(guard
            .iter()
            .filter(|t| t.is_active && t.department == department && t.semester == semester)
            .cloned()
            .collect())
    }
}
