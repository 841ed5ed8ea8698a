//! # Calgate Storage
//!
//! In-memory implementation of the `ResourceRepository` trait. Each
//! service constructs and owns its own store instance; persistence is an
//! injection point, not an ambient global.

mod memory;

pub use memory::{IdGenerator, MemoryRepository, SequentialIds, UuidIds};
