//! Todo entity - checklist items with a toggleable completed flag

use serde::{Deserialize, Serialize};

use crate::error::{require_field, CalendarResult};
use crate::repository::Resource;

/// A single todo item belonging to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned by the repository
    #[serde(default)]
    pub id: String,

    /// Owning user
    pub user_id: String,

    /// Short title, required and non-empty
    pub title: String,

    /// Free-form description, defaults to empty on create
    #[serde(default)]
    pub description: String,

    /// Completion status, always starts out false
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a new, not-yet-stored todo
    pub fn new(user_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.into(),
            title: title.into(),
            description: String::new(),
            completed: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Resource for Todo {
    const KIND: &'static str = "todo";
    const COLLECTION: &'static str = "todos";
    const ACTION_RELS: &'static [&'static str] = &["toggle"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn owner_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }

    fn validate(&self) -> CalendarResult<()> {
        require_field("title", &self.title)?;
        require_field("userId", &self.user_id)?;
        Ok(())
    }

    fn apply_create_defaults(&mut self) {
        // New todos always start uncompleted, whatever the caller sent.
        self.completed = false;
    }
}
