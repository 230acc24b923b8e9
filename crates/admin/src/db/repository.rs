//! Generic record repository.
//!
//! A [`Repository`] keeps the full record list in memory, in insertion
//! order, and writes it through to the store on every mutation. The new list
//! is persisted first and only then committed in memory, so a failed write
//! leaves the repository exactly as it was.

use std::rc::Rc;

use tracing::{debug, info, instrument};

use super::RepositoryError;
use crate::clock::Clock;
use crate::models::Record;
use crate::store::{self, KeyValueStore};

/// In-memory list of one record kind, mirrored to a [`KeyValueStore`].
pub struct Repository<R: Record> {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    records: Vec<R>,
    last_id: i64,
}

impl<R: Record> std::fmt::Debug for Repository<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("kind", &R::KIND)
            .field("records", &self.records.len())
            .field("last_id", &self.last_id)
            .finish_non_exhaustive()
    }
}

impl<R: Record> Repository<R> {
    /// Load the repository from its list key.
    ///
    /// A missing or undecodable list starts empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the store cannot be read.
    pub fn load(
        store: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
    ) -> Result<Self, RepositoryError> {
        let mut repository = Self {
            store,
            clock,
            records: Vec::new(),
            last_id: 0,
        };
        repository.reload()?;
        Ok(repository)
    }

    /// Replace the in-memory list with what the store holds now.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the store cannot be read.
    pub fn reload(&mut self) -> Result<(), RepositoryError> {
        let records: Vec<R> = store::load_list(self.store.as_ref(), R::KIND.list_key())?;
        self.last_id = records
            .iter()
            .map(|record| Into::<i64>::into(record.id()))
            .max()
            .unwrap_or(0);
        debug!(kind = %R::KIND, count = records.len(), "Loaded records");
        self.records = records;
        Ok(())
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by id.
    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Store a new record built from `draft` under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the list or counter cannot be
    /// written; nothing changes in memory in that case.
    #[instrument(skip(self, draft), fields(kind = %R::KIND))]
    pub fn create(&mut self, draft: R::Draft) -> Result<R, RepositoryError> {
        let id = self.next_id();
        let record = R::from_draft(R::Id::from(id), draft);

        let mut next = self.records.clone();
        next.push(record.clone());
        self.persist(&next)?;

        self.records = next;
        self.last_id = id;
        info!(id, name = record.name(), "Record created");
        Ok(record)
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has that id, or
    /// `RepositoryError::Storage` if the write fails.
    #[instrument(skip(self, record), fields(kind = %R::KIND, id = %record.id()))]
    pub fn update(&mut self, record: R) -> Result<R, RepositoryError> {
        let Some(position) = self.position(record.id()) else {
            return Err(RepositoryError::NotFound {
                kind: R::KIND,
                id: record.id().into(),
            });
        };

        let mut next = self.records.clone();
        if let Some(slot) = next.get_mut(position) {
            *slot = record.clone();
        }
        self.persist(&next)?;

        self.records = next;
        info!(name = record.name(), "Record updated");
        Ok(record)
    }

    /// Remove the record with `id`, returning it.
    ///
    /// Deleting an id that is not present is a no-op and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the write fails.
    #[instrument(skip(self), fields(kind = %R::KIND))]
    pub fn delete(&mut self, id: R::Id) -> Result<Option<R>, RepositoryError> {
        let Some(position) = self.position(id) else {
            debug!(%id, "Nothing to delete");
            return Ok(None);
        };

        let mut next = self.records.clone();
        let removed = next.remove(position);
        self.persist(&next)?;

        self.records = next;
        info!(%id, name = removed.name(), "Record deleted");
        Ok(Some(removed))
    }

    /// Rewrite the counter key from the in-memory list length.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the write fails.
    pub fn sync_counter(&self) -> Result<(), RepositoryError> {
        store::write_json(self.store.as_ref(), R::KIND.counter_key(), &self.records.len())?;
        Ok(())
    }

    /// Next id: the clock in milliseconds, bumped past the last id issued.
    fn next_id(&self) -> i64 {
        self.clock
            .now_millis()
            .max(self.last_id.saturating_add(1))
    }

    fn position(&self, id: R::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn persist(&self, records: &[R]) -> Result<(), RepositoryError> {
        let store = self.store.as_ref();
        store::write_json(store, R::KIND.list_key(), records)?;
        store::write_json(store, R::KIND.counter_key(), &records.len())?;
        Ok(())
    }
}
