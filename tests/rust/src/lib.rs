//! Shared test utilities and fixtures for Calgate integration tests.


pub use fixtures::{
    category_router, event_router, send, todo_router, user_router,
};
