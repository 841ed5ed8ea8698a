//! In-memory keyed store with atomic identifier allocation
//!
//! One `MemoryRepository` per resource type, backed by a sharded
//! concurrent map. Identifier allocation never hands the same id to two
//! concurrent `create` calls; concurrent writes to one id race at
//! last-writer-wins, which is the documented behavior.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;
use uuid::Uuid;

use calgate_core::error::{CalendarError, CalendarResult};
use calgate_core::repository::{Mutator, Predicate, Resource, ResourceRepository};

/// Collision-free identifier source for a repository.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers (users, todos, events).
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter identifiers starting at 1 (categories). Deleted ids
/// are never reused.
#[derive(Debug)]
pub struct SequentialIds(AtomicU64);

impl SequentialIds {
    pub fn new() -> Self {
        Self(AtomicU64::new(1))
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        self.0.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// In-memory `ResourceRepository` backed by a concurrent map.
pub struct MemoryRepository<T: Resource> {
    entries: DashMap<String, T>,
    ids: Arc<dyn IdGenerator>,
}

impl<T: Resource> MemoryRepository<T> {
    /// Create a store with random UUID identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidIds))
    }

    /// Create a store with monotonic counter identifiers.
    pub fn with_sequential_ids() -> Self {
        Self::with_id_generator(Arc::new(SequentialIds::new()))
    }

    /// Create a store with a caller-supplied identifier source.
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            entries: DashMap::new(),
            ids,
        }
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Resource> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> ResourceRepository<T> for MemoryRepository<T> {
    async fn create(&self, mut resource: T) -> CalendarResult<T> {
        if !resource.id().is_empty() {
            return Err(CalendarError::IdentitySupplied { kind: T::KIND });
        }
        resource.validate()?;
        resource.apply_create_defaults();

        // The vacant-entry insert makes allocation atomic: a UUID collision
        // (or a counter bug) surfaces as an occupied entry and we draw a
        // fresh id instead of overwriting.
        loop {
            let id = self.ids.next_id();
            match self.entries.entry(id.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    resource.set_id(id.clone());
                    slot.insert(resource.clone());
                    trace!(kind = T::KIND, id, "stored new resource");
                    return Ok(resource);
                }
            }
        }
    }

    async fn get(&self, id: &str) -> CalendarResult<T> {
        self.entries
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| CalendarError::not_found(T::KIND, id))
    }

    async fn list_by_owner(&self, owner_id: &str) -> CalendarResult<Vec<T>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.owner_id() == Some(owner_id))
            .map(|entry| entry.clone())
            .collect())
    }

    async fn list_all(&self) -> CalendarResult<Vec<T>> {
        Ok(self.entries.iter().map(|entry| entry.clone()).collect())
    }

    async fn filter(&self, predicate: Predicate<T>) -> CalendarResult<Vec<T>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| predicate(entry))
            .map(|entry| entry.clone())
            .collect())
    }

    async fn update(&self, id: &str, mut value: T) -> CalendarResult<T> {
        let Some(mut entry) = self.entries.get_mut(id) else {
            return Err(CalendarError::not_found(T::KIND, id));
        };
        // The path id is authoritative; an id embedded in the body is
        // never trusted.
        value.set_id(id.to_string());
        *entry = value.clone();
        Ok(value)
    }

    async fn delete(&self, id: &str) -> CalendarResult<()> {
        self.entries
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CalendarError::not_found(T::KIND, id))
    }

    async fn modify(&self, id: &str, mutator: Mutator<T>) -> CalendarResult<T> {
        let Some(mut entry) = self.entries.get_mut(id) else {
            return Err(CalendarError::not_found(T::KIND, id));
        };
        mutator(&mut entry);
        Ok(entry.clone())
    }
}
