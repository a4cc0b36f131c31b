//! Catalog collaborator.
//!
//! The generator reads batches, subjects, faculty and rooms through the
//! [`Catalog`] trait. Every query returns at most a fixed number of
//! records ([`FETCH_LIMIT`] by default). Records past the cap are dropped:
//! a full page means "possibly truncated", never "no more data".

mod memory;

pub use memory::InMemoryCatalog;

use async_trait::async_trait;
use tracing::warn;

use crate::error::CatalogError;
use crate::models::{Batch, Faculty, Room, Subject};
use crate::scheduler::CatalogSnapshot;

/// Default per-query record cap.
pub const FETCH_LIMIT: usize = 100;

/// Read-only queries consumed by the generator.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Batches of a department and semester.
    async fn find_batches(
        &self,
        department: &str,
        semester: u32,
    ) -> Result<Vec<Batch>, CatalogError>;

    /// Subjects of a department and semester.
    async fn find_subjects(
        &self,
        department: &str,
        semester: u32,
    ) -> Result<Vec<Subject>, CatalogError>;

    /// Faculty of a department.
    async fn find_faculty(&self, department: &str) -> Result<Vec<Faculty>, CatalogError>;

    /// Rooms flagged available.
    async fn find_available_rooms(&self) -> Result<Vec<Room>, CatalogError>;

    /// A single batch by id.
    async fn find_batch(&self, id: &str) -> Result<Option<Batch>, CatalogError>;
}

/// Runs the four generation queries in order and bundles the results.
///
/// Each collection is cut to `limit` records whatever the catalog returned.
/// A collection that reaches the cap is logged as possibly truncated.
pub async fn fetch_snapshot(
    catalog: &dyn Catalog,
    department: &str,
    semester: u32,
    limit: usize,
) -> Result<CatalogSnapshot, CatalogError> {
    let batches = catalog.find_batches(department, semester).await?;
    let subjects = catalog.find_subjects(department, semester).await?;
    let faculty = catalog.find_faculty(department).await?;
    let rooms = catalog.find_available_rooms().await?;
    Ok(CatalogSnapshot::new(
        page("batches", batches, limit),
        page("subjects", subjects, limit),
        page("faculty", faculty, limit),
        page("rooms", rooms, limit),
    ))
}

/// Whether a result of `len` records may have been cut at `limit`.
#[inline]
pub fn possibly_truncated(len: usize, limit: usize) -> bool {
    len >= limit
}

fn page<T>(kind: &str, mut records: Vec<T>, limit: usize) -> Vec<T> {
    if possibly_truncated(records.len(), limit) {
        warn!(
            kind,
            returned = records.len(),
            limit,
            "catalog result reached fetch limit; possibly truncated"
        );
        records.truncate(limit);
    }
    records
}
