//! User service - CRUD plus the register/login field-matching operations
//!
//! Register and login are simple field comparisons against the store.
//! They are deliberately NOT an authentication subsystem: passwords are
//! compared verbatim and no token or session is ever issued or checked.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Credentials, User};
use crate::error::{require_field, CalendarError, CalendarResult};
use crate::links::{Linked, LinkedCollection};
use crate::repository::{Resource, ResourceRepository};
use crate::service::ResourceService;

/// Service for managing users.
pub struct UserService {
    inner: ResourceService<User>,
    repository: Arc<dyn ResourceRepository<User>>,
}

impl UserService {
    /// Create a new UserService
    pub fn new(repository: Arc<dyn ResourceRepository<User>>) -> Self {
        Self {
            inner: ResourceService::new(repository.clone()),
            repository,
        }
    }

    /// Register a new user. The email must not already be taken.
    pub async fn register(&self, user: User) -> CalendarResult<Linked<User>> {
        user.validate()?;

        let email = user.email.clone();
        let taken = self
            .repository
            .filter(Box::new(move |u| u.email == email))
            .await?;
        if !taken.is_empty() {
            return Err(CalendarError::EmailAlreadyRegistered);
        }

        let stored = self.inner.create(user).await?;
        info!(id = stored.resource.id(), "registered user");
        Ok(stored)
    }

    /// Match credentials against the stored users and return the user
    /// on success. Plain field matching; no token is produced.
    pub async fn login(&self, credentials: Credentials) -> CalendarResult<Linked<User>> {
        require_field("email", &credentials.email)?;
        require_field("password", &credentials.password)?;

        let email = credentials.email.clone();
        let matches = self
            .repository
            .filter(Box::new(move |u| u.email == email))
            .await?;

        let Some(user) = matches.into_iter().next() else {
            debug!(email = credentials.email, "login for unknown email");
            return Err(CalendarError::InvalidCredentials(
                "no user registered with this email",
            ));
        };

        if user.password != credentials.password {
            return Err(CalendarError::InvalidCredentials("wrong password"));
        }

        Ok(self.inner.links().decorate(user))
    }

    /// Get a user by id
    pub async fn get(&self, id: &str) -> CalendarResult<Linked<User>> {
        self.inner.get(id).await
    }

    /// All registered users
    pub async fn list_all(&self) -> CalendarResult<LinkedCollection<User>> {
        self.inner.list_all().await
    }

    /// Replace a user
    pub async fn update(&self, id: &str, user: User) -> CalendarResult<Linked<User>> {
        self.inner.update(id, user).await
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> CalendarResult<()> {
        self.inner.delete(id).await
    }
}
