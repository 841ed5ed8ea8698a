//! Category entity - user-defined event categories

use serde::{Deserialize, Serialize};

use crate::error::{require_field, CalendarResult};
use crate::repository::Resource;

/// An event category. Categories use the sequential id strategy, so
/// their ids read as small decimal numbers rather than UUIDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, assigned by the repository
    #[serde(default)]
    pub id: String,

    /// Owning user
    pub user_id: String,

    /// Display name, required and non-empty
    pub name: String,

    /// Optional display color (e.g. "#ff8800")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    /// Create a new, not-yet-stored category
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.into(),
            name: name.into(),
            color: None,
        }
    }

    /// Set the display color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Resource for Category {
    const KIND: &'static str = "category";
    const COLLECTION: &'static str = "categories";

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
        require_field("name", &self.name)?;
        require_field("userId", &self.user_id)?;
        Ok(())
    }
}
