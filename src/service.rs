//! Request boundary for timetable generation and lookup.
//!
//! Each `generate` call awaits the catalog fetch, then runs the assigner
//! synchronously with the shared rng, assembles the timetable and hands it
//! to the store. Concurrent calls are independent: no locking spans the
//! catalog fetch, and every call persists its own timetable.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{fetch_snapshot, Catalog, FETCH_LIMIT};
use crate::config::GeneratorConfig;
use crate::error::{Result, TimetableError};
use crate::models::{Batch, ScheduleEntry, Timetable};
use crate::scheduler::{Assembler, Assigner, SlotStrategy};
use crate::store::TimetableStore;

/// One cohort's slice of its active timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTimetable {
    pub batch: Batch,
    pub timetable_id: String,
    pub entries: Vec<ScheduleEntry>,
}

/// Generation and lookup operations over a catalog and a store.
pub struct TimetableService<C, S> {
    catalog: C,
    store: S,
    assigner: Assigner,
    rng: Mutex<StdRng>,
    fetch_limit: usize,
}

impl<C, S> TimetableService<C, S>
where
    C: Catalog,
    S: TimetableStore,
{
    /// Creates a service seeded from the OS.
    pub fn new(catalog: C, store: S) -> Self {
        Self::with_config(catalog, store, &GeneratorConfig::default())
    }

    /// Creates a service whose rng and fetch limit follow `config`.
    pub fn with_config(catalog: C, store: S, config: &GeneratorConfig) -> Self {
        Self::with_rng(catalog, store, config.rng()).with_fetch_limit(config.fetch_limit)
    }

    /// Creates a service around an explicit rng, capped at [`FETCH_LIMIT`].
    pub fn with_rng(catalog: C, store: S, rng: StdRng) -> Self {
        Self {
            catalog,
            store,
            assigner: Assigner::new(),
            rng: Mutex::new(rng),
            fetch_limit: FETCH_LIMIT,
        }
    }

    /// Sets the per-collection record cap applied to catalog results.
    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }

    pub fn fetch_limit(&self) -> usize {
        self.fetch_limit
    }

    /// Replaces the slot-selection strategy.
    pub fn with_strategy<T: SlotStrategy + 'static>(mut self, strategy: T) -> Self {
        self.assigner = self.assigner.with_strategy(strategy);
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generates and stores a timetable for a department and semester.
    ///
    /// # Errors
    /// - `Invalid` for a blank department.
    /// - `InsufficientData` when batches, subjects, faculty or rooms is
    ///   empty; nothing is stored.
    /// - `Catalog` when a collaborator fails.
    pub async fn generate(&self, department: &str, semester: u32) -> Result<Timetable> {
        if department.trim().is_empty() {
            return Err(TimetableError::Invalid("department must not be empty".into()));
        }

        debug!(department, semester, "fetching catalog");
        let snapshot =
            fetch_snapshot(&self.catalog, department, semester, self.fetch_limit).await?;

        let entries = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            self.assigner
                .assign(department, semester, &snapshot, &mut *rng)?
        };

        let timetable = Assembler::assemble(department, semester, entries);
        self.store.insert(timetable.clone()).await?;

        info!(
            timetable = %timetable.id,
            department,
            semester,
            entries = timetable.entry_count(),
            "timetable generated"
        );
        Ok(timetable)
    }

    /// Looks up a stored timetable.
    pub async fn timetable(&self, id: &str) -> Result<Timetable> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| TimetableError::not_found("Timetable", id))
    }

    /// All stored timetables.
    pub async fn timetables(&self) -> Result<Vec<Timetable>> {
        Ok(self.store.list().await?)
    }

    /// Sets a timetable's active flag.
    pub async fn set_active(&self, id: &str, active: bool) -> Result<Timetable> {
        let updated = self
            .store
            .set_active(id, active)
            .await?
            .ok_or_else(|| TimetableError::not_found("Timetable", id))?;
        info!(timetable = %id, active, "timetable activation changed");
        Ok(updated)
    }

    /// The entries of a batch in the first active timetable of its
    /// department and semester.
    pub async fn batch_timetable(&self, batch_id: &str) -> Result<BatchTimetable> {
        let batch = self
            .catalog
            .find_batch(batch_id)
            .await?
            .ok_or_else(|| TimetableError::not_found("Batch", batch_id))?;

        let timetable = self
            .store
            .find_active(&batch.department, batch.semester)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TimetableError::not_found("Active timetable", batch_id))?;

        let entries = timetable
            .entries_for_cohort(&batch.id)
            .into_iter()
            .cloned()
            .collect();

        Ok(BatchTimetable {
            batch,
            timetable_id: timetable.id,
            entries,
        })
    }
}
