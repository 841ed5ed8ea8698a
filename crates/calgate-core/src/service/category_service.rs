//! Category service - plain CRUD over the generic core

use std::sync::Arc;

use crate::domain::Category;
use crate::error::CalendarResult;
use crate::links::{Linked, LinkedCollection};
use crate::repository::ResourceRepository;
use crate::service::ResourceService;

/// Service for managing categories. Backed by the sequential-id store
/// so category ids read as small decimal numbers.
pub struct CategoryService {
    inner: ResourceService<Category>,
}

impl CategoryService {
    /// Create a new CategoryService
    pub fn new(repository: Arc<dyn ResourceRepository<Category>>) -> Self {
        Self {
            inner: ResourceService::new(repository),
        }
    }

    /// Create a category
    pub async fn create(&self, category: Category) -> CalendarResult<Linked<Category>> {
        self.inner.create(category).await
    }

    /// Get a category by id
    pub async fn get(&self, id: &str) -> CalendarResult<Linked<Category>> {
        self.inner.get(id).await
    }

    /// All categories of one user
    pub async fn list_by_owner(&self, user_id: &str) -> CalendarResult<LinkedCollection<Category>> {
        self.inner.list_by_owner(user_id).await
    }

    /// Replace a category
    pub async fn update(&self, id: &str, category: Category) -> CalendarResult<Linked<Category>> {
        self.inner.update(id, category).await
    }

    /// Delete a category
    pub async fn delete(&self, id: &str) -> CalendarResult<()> {
        self.inner.delete(id).await
    }
}
