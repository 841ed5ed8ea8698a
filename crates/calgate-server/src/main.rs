//! Calgate launcher
//!
//! Starts the four backend services (events 8081, users 8082, todos
//! 8083, categories 8085) and the gateway (8080) inside one process,
//! each on its own listener. Every service constructs and owns its own
//! in-memory store; nothing is shared between them except the network.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use calgate_core::{
    Category, CategoryService, Event, EventService, Todo, TodoService, User, UserService,
};
use calgate_gateway::{GatewayConfig, GatewayServer};
use calgate_rest::{categories, events, todos, users, BackendServer};
use calgate_storage::MemoryRepository;

fn env_port(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host = std::env::var("CALGATE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    // One injected store per service. The category store uses sequential
    // ids; everything else uses UUIDs.
    let event_service = Arc::new(EventService::new(Arc::new(MemoryRepository::<Event>::new())));
    let user_service = Arc::new(UserService::new(Arc::new(MemoryRepository::<User>::new())));
    let todo_service = Arc::new(TodoService::new(Arc::new(MemoryRepository::<Todo>::new())));
    let category_service = Arc::new(CategoryService::new(Arc::new(
        MemoryRepository::<Category>::with_sequential_ids(),
    )));

    let backends = vec![
        BackendServer::new(
            "events",
            &host,
            env_port("CALGATE_EVENTS_PORT", 8081),
            events::router(event_service),
        )?,
        BackendServer::new(
            "users",
            &host,
            env_port("CALGATE_USERS_PORT", 8082),
            users::router(user_service),
        )?,
        BackendServer::new(
            "todos",
            &host,
            env_port("CALGATE_TODOS_PORT", 8083),
            todos::router(todo_service),
        )?,
        BackendServer::new(
            "categories",
            &host,
            env_port("CALGATE_CATEGORIES_PORT", 8085),
            categories::router(category_service),
        )?,
    ];

    // An invalid gateway configuration (e.g. wildcard origin combined
    // with allow-credentials) aborts startup here.
    let gateway_config = match std::env::var("CALGATE_GATEWAY_CONFIG") {
        Ok(path) => GatewayConfig::from_file(&path)?,
        Err(_) => GatewayConfig {
            host: host.clone(),
            port: env_port("CALGATE_GATEWAY_PORT", 8080),
            ..GatewayConfig::default()
        },
    };
    let gateway = GatewayServer::new(gateway_config)?;

    info!("starting {} backend services + gateway", backends.len());

    let mut handles: Vec<_> = backends.into_iter().map(BackendServer::spawn).collect();
    handles.push(gateway.spawn());

    // The servers run until the process is stopped; a returning task
    // means a bind failure or another fatal serve error.
    for handle in handles {
        handle.await??;
    }

    Ok(())
}
