//! Domain entities for the calendar backend
//!
//! One entity per backend service:
//! - `User` - accounts (not ownership-scoped)
//! - `Todo` - checklist items with a toggleable completed flag
//! - `Category` - user-defined event categories (sequential ids)
//! - `Event` - calendar entries with a strict `start < end` invariant

mod category;
mod event;
mod todo;
mod user;

pub use category::Category;
pub use event::{Event, Priority};
pub use todo::Todo;
pub use user::{Credentials, User};
