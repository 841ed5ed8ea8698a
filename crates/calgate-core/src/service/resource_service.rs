//! Generic resource orchestration - validate, delegate, decorate
//!
//! The shared CRUD shape of every backend service: type-specific field
//! validation runs before any repository call, not-found conditions
//! propagate unchanged, and successful results come back decorated with
//! their hypermedia link sets.

use std::sync::Arc;

use tracing::debug;

use crate::error::CalendarResult;
use crate::links::{LinkBuilder, Linked, LinkedCollection};
use crate::repository::{Resource, ResourceRepository};

/// Generic per-type orchestration over an injected repository.
pub struct ResourceService<T: Resource> {
    repository: Arc<dyn ResourceRepository<T>>,
    links: LinkBuilder,
}

impl<T: Resource> ResourceService<T> {
    /// Create a service over `repository`, generating relative links.
    pub fn new(repository: Arc<dyn ResourceRepository<T>>) -> Self {
        Self {
            repository,
            links: LinkBuilder::new(),
        }
    }

    /// Generate absolute links rooted at `base`.
    pub fn with_link_base(mut self, base: impl Into<String>) -> Self {
        self.links = LinkBuilder::with_base(base);
        self
    }

    /// The link builder used for response decoration.
    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }

    /// The injected repository handle.
    pub fn repository(&self) -> &Arc<dyn ResourceRepository<T>> {
        &self.repository
    }

    /// Validate and store a new resource, returning it decorated.
    pub async fn create(&self, resource: T) -> CalendarResult<Linked<T>> {
        resource.validate()?;
        let stored = self.repository.create(resource).await?;
        debug!(kind = T::KIND, id = stored.id(), "created resource");
        Ok(self.links.decorate(stored))
    }

    /// Fetch one resource by id.
    pub async fn get(&self, id: &str) -> CalendarResult<Linked<T>> {
        let resource = self.repository.get(id).await?;
        Ok(self.links.decorate(resource))
    }

    /// All resources owned by `owner_id`, with a collection self link.
    pub async fn list_by_owner(&self, owner_id: &str) -> CalendarResult<LinkedCollection<T>> {
        let items = self.repository.list_by_owner(owner_id).await?;
        Ok(self.links.decorate_collection(items, Some(owner_id)))
    }

    /// Every stored resource, with a collection self link.
    pub async fn list_all(&self) -> CalendarResult<LinkedCollection<T>> {
        let items = self.repository.list_all().await?;
        Ok(self.links.decorate_collection(items, None))
    }

    /// Validate and replace a stored resource. The path id wins over any
    /// id embedded in `value`.
    pub async fn update(&self, id: &str, value: T) -> CalendarResult<Linked<T>> {
        value.validate()?;
        let stored = self.repository.update(id, value).await?;
        debug!(kind = T::KIND, id, "updated resource");
        Ok(self.links.decorate(stored))
    }

    /// Remove a stored resource.
    pub async fn delete(&self, id: &str) -> CalendarResult<()> {
        self.repository.delete(id).await?;
        debug!(kind = T::KIND, id, "deleted resource");
        Ok(())
    }
}
