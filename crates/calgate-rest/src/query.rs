//! Event query interface
//!
//! A typed JSON operation envelope: one POST endpoint, one tagged
//! operation per request.
//! Date-times parse and serialize as ISO-8601 local date-times
//! ("2025-03-01T09:00:00", no offset).

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{json, Value};

use calgate_core::{CalendarResult, Event, EventService, Priority};

/// One query or mutation against the event service.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum EventQuery {
    /// Fetch a single event by id
    Event { id: String },

    /// All events of one user
    #[serde(rename_all = "camelCase")]
    EventsByUser { user_id: String },

    /// Events whose whole interval is contained in `[start, end]`
    EventsByDateRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Create an event
    #[serde(rename_all = "camelCase")]
    CreateEvent {
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        user_id: String,
        #[serde(default)]
        priority: Priority,
        category_id: Option<String>,
    },

    /// Replace an event's fields
    #[serde(rename_all = "camelCase")]
    UpdateEvent {
        id: String,
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        user_id: String,
        #[serde(default)]
        priority: Priority,
        category_id: Option<String>,
    },

    /// Delete an event
    DeleteEvent { id: String },
}

fn build_event(
    user_id: String,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    priority: Priority,
    category_id: Option<String>,
) -> Event {
    let mut event = Event::new(user_id, title, start, end).with_priority(priority);
    event.category_id = category_id;
    event
}

/// Execute one operation. Results are plain event payloads; `_links`
/// decoration belongs to the REST surface only.
pub async fn execute(service: &EventService, query: EventQuery) -> CalendarResult<Value> {
    match query {
        EventQuery::Event { id } => {
            let event = service.event(&id).await?;
            Ok(json!({ "event": event }))
        }
        EventQuery::EventsByUser { user_id } => {
            let events = service.events_by_user(&user_id).await?;
            Ok(json!({ "events": events }))
        }
        EventQuery::EventsByDateRange { start, end } => {
            let events = service.events_by_date_range(start, end).await?;
            Ok(json!({ "events": events }))
        }
        EventQuery::CreateEvent {
            title,
            start,
            end,
            user_id,
            priority,
            category_id,
        } => {
            let event = build_event(user_id, title, start, end, priority, category_id);
            let created = service.create(event).await?;
            Ok(json!({ "event": created.resource }))
        }
        EventQuery::UpdateEvent {
            id,
            title,
            start,
            end,
            user_id,
            priority,
            category_id,
        } => {
            let event = build_event(user_id, title, start, end, priority, category_id);
            let updated = service.update(&id, event).await?;
            Ok(json!({ "event": updated.resource }))
        }
        EventQuery::DeleteEvent { id } => {
            service.delete(&id).await?;
            Ok(json!({ "deleted": true }))
        }
    }
}
