//! # Calgate Core Library
//!
//! Domain logic, entities, and business rules for the Calgate calendar backend.
//!
//! ## Modules
//!
//! - `domain` - Core entities (User, Todo, Category, Event)
//! - `error` - Domain error kinds shared by every service
//! - `links` - Hypermedia link construction for API responses
//! - `repository` - Data access traits
//! - `service` - Domain services (validation, CRUD orchestration)

pub mod domain;
pub mod error;
pub mod links;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use domain::*;
pub use error::{CalendarError, CalendarResult};
pub use links::{Link, LinkBuilder, LinkSet, Linked, LinkedCollection};
pub use repository::{Mutator, Predicate, Resource, ResourceRepository};
pub use service::*;
