//! Shared test harness for the API integration tests.
//!
//! `TestContext::new` connects to the database named by `DATABASE_URL`,
//! runs migrations, and truncates both tables so every test starts from a
//! clean slate. When `DATABASE_URL` is not set the context is `None` and
//! tests skip themselves.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sqlx::PgPool;
use taskmanager_api::{
    app::{build_router, AppState},
    config::{ApiConfig, Config, DatabaseConfig as ApiDatabaseConfig},
};
use taskmanager_shared::db::{
    migrations::run_migrations,
    pool::{create_pool, DatabaseConfig},
};
use tower::Service as _;

/// Holds the router and pool for one test.
pub struct TestContext {
    pub db: PgPool,
    pub app: Router,
}

impl TestContext {
    /// Builds a fresh context, or `None` when no database is configured.
    pub async fn new() -> Option<Self> {
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("DATABASE_URL not set, skipping integration test");
                return None;
            }
        };

        let pool = create_pool(DatabaseConfig {
            url: url.clone(),
            max_connections: 5,
            ..Default::default()
        })
        .await
        .expect("failed to connect to test database");

        run_migrations(&pool).await.expect("migrations failed");

        // Known-empty state; requires --test-threads=1
        sqlx::query("TRUNCATE tasks, users RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("failed to truncate tables");

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: ApiDatabaseConfig {
                url,
                max_connections: 5,
            },
        };

        let state = AppState::new(pool.clone(), config);

        Some(Self {
            db: pool,
            app: build_router(state),
        })
    }
}

/// Sends one request through the router and returns status plus parsed body.
///
/// Empty bodies (e.g. 204 responses) come back as `Value::Null`.
pub async fn send(
    ctx: &TestContext,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = ctx.app.clone().call(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, value)
}

/// Creates a user through the API and returns its JSON representation.
pub async fn create_user(ctx: &TestContext, username: &str) -> serde_json::Value {
    let (status, body) = send(
        ctx,
        "POST",
        "/user/create",
        Some(serde_json::json!({
            "username": username,
            "firstname": "Test",
            "lastname": "User",
            "age": 30
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "create_user failed: {}", body);
    body
}

/// Creates a task through the API and returns its JSON representation.
pub async fn create_task(ctx: &TestContext, user_id: i64, title: &str) -> serde_json::Value {
    let (status, body) = send(
        ctx,
        "POST",
        &format!("/task/create?user_id={}", user_id),
        Some(serde_json::json!({
            "title": title,
            "content": "details",
            "priority": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "create_task failed: {}", body);
    body
}
