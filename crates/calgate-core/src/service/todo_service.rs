//! Todo service - CRUD plus the toggle specialization

use std::sync::Arc;

use tracing::debug;

use crate::domain::Todo;
use crate::error::CalendarResult;
use crate::links::{Linked, LinkedCollection};
use crate::repository::ResourceRepository;
use crate::service::ResourceService;

/// Service for managing todos.
pub struct TodoService {
    inner: ResourceService<Todo>,
    repository: Arc<dyn ResourceRepository<Todo>>,
}

impl TodoService {
    /// Create a new TodoService
    pub fn new(repository: Arc<dyn ResourceRepository<Todo>>) -> Self {
        Self {
            inner: ResourceService::new(repository.clone()),
            repository,
        }
    }

    /// Create a todo. New todos always start uncompleted.
    pub async fn create(&self, todo: Todo) -> CalendarResult<Linked<Todo>> {
        self.inner.create(todo).await
    }

    /// Get a todo by id
    pub async fn get(&self, id: &str) -> CalendarResult<Linked<Todo>> {
        self.inner.get(id).await
    }

    /// All todos of one user
    pub async fn list_by_owner(&self, user_id: &str) -> CalendarResult<LinkedCollection<Todo>> {
        self.inner.list_by_owner(user_id).await
    }

    /// Replace a todo
    pub async fn update(&self, id: &str, todo: Todo) -> CalendarResult<Linked<Todo>> {
        self.inner.update(id, todo).await
    }

    /// Delete a todo
    pub async fn delete(&self, id: &str) -> CalendarResult<()> {
        self.inner.delete(id).await
    }

    /// Flip the completed flag in place and return the new state.
    pub async fn toggle(&self, id: &str) -> CalendarResult<Linked<Todo>> {
        let toggled = self
            .repository
            .modify(id, Box::new(|todo| todo.completed = !todo.completed))
            .await?;
        debug!(id, completed = toggled.completed, "toggled todo");
        Ok(self.inner.links().decorate(toggled))
    }
}
