//! Domain services
//!
//! One generic orchestration core (`ResourceService`) plus a thin
//! per-type wrapper for each backend service. Every service owns its
//! injected repository handle; there is no ambient global state.

mod category_service;
mod event_service;
mod resource_service;
mod todo_service;
mod user_service;

pub use category_service::CategoryService;
pub use event_service::EventService;
pub use resource_service::ResourceService;
pub use todo_service::TodoService;
pub use user_service::UserService;
