pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, MemoryStore, SessionManagerLayer};

use crate::services::AppState;

// Builds the application router with session handling and the auth gate wired
// in. Tests drive this router directly.
pub fn app(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_name("session");

    Router::new()
        // Auth routes
        .route("/api/auth/login", post(handlers::handle_login))
        .route("/api/auth/logout", delete(handlers::handle_logout))
        // User routes
        .route("/api/users/register", post(handlers::handle_register))
        .route("/api/users/all", get(handlers::list_users))
        // Task routes
        .route("/api/tasks", post(handlers::create_task))
        .route(
            "/api/tasks/all",
            get(handlers::list_all_tasks).post(handlers::search_tasks),
        )
        .route(
            "/api/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        // Category routes
        .route("/api/categories", post(handlers::create_category))
        .route("/api/categories/all", get(handlers::list_categories))
        .route(
            "/api/categories/:id",
            get(handlers::get_category).delete(handlers::delete_category),
        )
        // Add middleware
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
