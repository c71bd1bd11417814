//! The board: an ordered, persisted collection of [`StatusRecord`]s with
//! synchronous change notification.
//!
//! Records are addressed by position. Positions shift after a removal, so
//! callers must re-read [`StatusStore::all`] before issuing another
//! index-based call.
//!
//! Every successful mutation (`add`, `remove`, `clear`, `load`) runs in one
//! step: update the collection, write it back to the last loaded path (if
//! any), then call every subscriber in registration order.

use super::document;
use crate::errors::AppResult;
use crate::models::StatusRecord;
use crate::utils::date;
use chrono::NaiveDateTime;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Callback run after each mutation. It receives the store read-only, so
/// queries are allowed from inside the handler.
pub type Observer = Box<dyn Fn(&StatusStore)>;

/// Handle returned by [`StatusStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct StatusStore {
    statuses: Vec<StatusRecord>,
    path: Option<PathBuf>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl StatusStore {
    /// Empty, in-memory store. Nothing is persisted until [`load`](Self::load)
    /// sets a backing file.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------
    // Persistence
    // ------------------------------------------------

    /// Replace the whole collection with the content of `path` and remember
    /// `path` for later auto-persist.
    ///
    /// Fails with `AppError::Io` if the file cannot be read and with
    /// `AppError::Format` if it is not a `{"statuses": [...]}` document. On
    /// failure neither the collection nor the backing path change.
    pub fn load(&mut self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();

        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        let statuses = document::parse(&content, date::now())?;

        tracing::debug!(path = %path.display(), count = statuses.len(), "status file loaded");

        self.statuses = statuses;
        self.path = Some(path.to_path_buf());
        self.notify();
        Ok(())
    }

    /// Write the collection to `path`, overwriting it. Does not notify.
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let content = document::render(&self.statuses)?;
        fs::write(path, content)?;

        tracing::debug!(path = %path.display(), count = self.statuses.len(), "status file saved");
        Ok(())
    }

    /// Backing file set by the last successful `load`.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn persist(&self) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        self.save(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to persist statuses");
        })
    }

    // ------------------------------------------------
    // Queries
    // ------------------------------------------------

    /// Every record, in insertion order.
    pub fn all(&self) -> &[StatusRecord] {
        &self.statuses
    }

    pub fn get(&self, index: usize) -> Option<&StatusRecord> {
        self.statuses.get(index)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Records active at `now`, order preserved.
    pub fn active(&self, now: NaiveDateTime) -> Vec<&StatusRecord> {
        self.statuses.iter().filter(|s| s.is_active(now)).collect()
    }

    /// Records expired at `now`, order preserved.
    pub fn expired(&self, now: NaiveDateTime) -> Vec<&StatusRecord> {
        self.statuses.iter().filter(|s| s.is_expired(now)).collect()
    }

    // ------------------------------------------------
    // Mutations
    // ------------------------------------------------

    /// Append `record`.
    ///
    /// The record stays in memory and subscribers are notified even when
    /// writing the file fails; that failure is returned.
    pub fn add(&mut self, record: StatusRecord) -> AppResult<()> {
        tracing::debug!(icon = record.icon(), description = record.description(), "adding status");

        self.statuses.push(record);
        let saved = self.persist();
        self.notify();
        saved
    }

    /// Remove the record at `index`.
    ///
    /// Returns `Ok(false)` without persisting or notifying when `index` is
    /// out of range. A persist failure after a removal is returned as `Err`;
    /// the removal itself is kept.
    pub fn remove(&mut self, index: usize) -> AppResult<bool> {
        if index >= self.statuses.len() {
            tracing::debug!(index, len = self.statuses.len(), "remove ignored, index out of range");
            return Ok(false);
        }

        self.statuses.remove(index);
        let saved = self.persist();
        self.notify();
        saved.map(|_| true)
    }

    /// Remove everything. Always notifies, even if the store was empty.
    pub fn clear(&mut self) -> AppResult<()> {
        self.statuses.clear();
        let saved = self.persist();
        self.notify();
        saved
    }

    // ------------------------------------------------
    // Change notification
    // ------------------------------------------------

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&StatusStore) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(self);
        }
    }
}

impl fmt::Debug for StatusStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusStore")
            .field("statuses", &self.statuses)
            .field("path", &self.path)
            .field("observers", &self.observers.len())
            .finish()
    }
}
