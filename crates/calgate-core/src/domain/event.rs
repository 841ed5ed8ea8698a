//! Event entity - calendar entries with a strict time-range invariant

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{require_field, CalendarError, CalendarResult};
use crate::repository::Resource;

/// Event priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// A calendar event. Date-times are ISO-8601 local date-times without an
/// offset ("2025-03-01T09:00:00"); `start` must strictly precede `end`
/// at creation and on any update that changes either bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, assigned by the repository
    #[serde(default)]
    pub id: String,

    /// Owning user
    pub user_id: String,

    /// Display title, required and non-empty
    pub title: String,

    /// Start of the event interval
    pub start: NaiveDateTime,

    /// End of the event interval, strictly after `start`
    pub end: NaiveDateTime,

    /// Priority, defaults to medium
    #[serde(default)]
    pub priority: Priority,

    /// Optional category reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Event {
    /// Create a new, not-yet-stored event
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.into(),
            title: title.into(),
            start,
            end,
            priority: Priority::default(),
            category_id: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the category reference
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Enforce the `start < end` invariant
    pub fn check_time_range(&self) -> CalendarResult<()> {
        if self.start >= self.end {
            return Err(CalendarError::InvalidTimeRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Resource for Event {
    const KIND: &'static str = "event";
    const COLLECTION: &'static str = "events";

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
        self.check_time_range()
    }
}
