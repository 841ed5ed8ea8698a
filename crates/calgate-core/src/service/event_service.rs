//! Event service - CRUD, time-range enforcement, and the query operations
//!
//! Backs both the REST surface and the query interface. The date-range
//! query uses containment semantics: an event matches only when its whole
//! `[start, end]` interval lies inside the queried window. Overlap is not
//! enough.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::Event;
use crate::error::CalendarResult;
use crate::links::{Linked, LinkedCollection};
use crate::repository::ResourceRepository;
use crate::service::ResourceService;

/// Service for managing calendar events.
pub struct EventService {
    inner: ResourceService<Event>,
    repository: Arc<dyn ResourceRepository<Event>>,
}

impl EventService {
    /// Create a new EventService
    pub fn new(repository: Arc<dyn ResourceRepository<Event>>) -> Self {
        Self {
            inner: ResourceService::new(repository.clone()),
            repository,
        }
    }

    /// Create an event. Fails with `InvalidTimeRange` (and stores
    /// nothing) unless `start` strictly precedes `end`.
    pub async fn create(&self, event: Event) -> CalendarResult<Linked<Event>> {
        event.check_time_range()?;
        self.inner.create(event).await
    }

    /// Get an event by id, decorated for the REST surface
    pub async fn get(&self, id: &str) -> CalendarResult<Linked<Event>> {
        self.inner.get(id).await
    }

    /// Get an event by id, undecorated for the query interface
    pub async fn event(&self, id: &str) -> CalendarResult<Event> {
        self.repository.get(id).await
    }

    /// All events of one user, decorated for the REST surface
    pub async fn list_by_owner(&self, user_id: &str) -> CalendarResult<LinkedCollection<Event>> {
        self.inner.list_by_owner(user_id).await
    }

    /// All events of one user, undecorated for the query interface
    pub async fn events_by_user(&self, user_id: &str) -> CalendarResult<Vec<Event>> {
        self.repository.list_by_owner(user_id).await
    }

    /// Events whose `[start, end]` interval is fully contained in the
    /// queried window. An event that merely overlaps the window is
    /// excluded.
    pub async fn events_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> CalendarResult<Vec<Event>> {
        let events = self
            .repository
            .filter(Box::new(move |event| {
                event.start >= start && event.end <= end
            }))
            .await?;
        debug!(%start, %end, matched = events.len(), "date range query");
        Ok(events)
    }

    /// Replace an event, re-checking the time-range invariant
    pub async fn update(&self, id: &str, event: Event) -> CalendarResult<Linked<Event>> {
        event.check_time_range()?;
        self.inner.update(id, event).await
    }

    /// Delete an event
    pub async fn delete(&self, id: &str) -> CalendarResult<()> {
        self.inner.delete(id).await
    }
}
