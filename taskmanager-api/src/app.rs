//! Application state and router builder.
//!
//! # Routes
//!
//! ```text
//! /
//! ├── GET    /                      # Welcome payload
//! ├── GET    /health                # Health check
//! ├── /user/
//! │   ├── GET    /                  # List all users
//! │   ├── GET    /:id               # Fetch one user
//! │   ├── POST   /create            # Create user (201)
//! │   ├── PUT    /update?user_id=   # Full update (200)
//! │   ├── DELETE /delete?user_id=   # Delete user + owned tasks (204)
//! │   └── GET    /:id/tasks/        # Tasks owned by a user
//! └── /task/
//!     ├── GET    /                  # List all tasks
//!     ├── GET    /:id               # Fetch one task
//!     ├── POST   /create?user_id=   # Create task (201)
//!     ├── PUT    /update?task_id=   # Full update (200)
//!     └── DELETE /delete?task_id=   # Delete task (204)
//! ```
//!
//! # Middleware Stack
//!
//! 1. Request logging (tower-http TraceLayer)
//! 2. CORS (tower-http CorsLayer; permissive unless origins are configured)

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state.
///
/// Cloned for each request handler via Axum's `State` extractor; the config
/// sits behind an Arc so cloning stays cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let user_routes = Router::new()
        .route("/", get(routes::user::list_users))
        .route("/create", post(routes::user::create_user))
        .route("/update", put(routes::user::update_user))
        .route("/delete", delete(routes::user::delete_user))
        .route("/:id", get(routes::user::get_user))
        .route("/:id/tasks/", get(routes::user::list_user_tasks));

    let task_routes = Router::new()
        .route("/", get(routes::task::list_tasks))
        .route("/create", post(routes::task::create_task))
        .route("/update", put(routes::task::update_task))
        .route("/delete", delete(routes::task::delete_task))
        .route("/:id", get(routes::task::get_task));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::health_check))
        .nest("/user", user_routes)
        .nest("/task", task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
