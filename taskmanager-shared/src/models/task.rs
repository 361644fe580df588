//! Task model and database operations.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id SERIAL PRIMARY KEY,
//!     title VARCHAR(255) NOT NULL,
//!     content TEXT NOT NULL,
//!     priority INTEGER NOT NULL,
//!     slug VARCHAR(255) NOT NULL,
//!     user_id INTEGER NOT NULL REFERENCES users(id)
//! );
//! ```

use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A task belonging to exactly one user.
///
/// The slug is derived from the title at creation and never recomputed.
/// Whether `user_id` points at an existing user is checked by the create
/// handler; the table carries a plain FK without ON DELETE CASCADE.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (generated by the database)
    pub id: i32,

    /// Short title
    pub title: String,

    /// Free-text body
    pub content: String,

    /// Priority, higher is more urgent
    pub priority: i32,

    /// URL-safe form of the title, fixed at creation
    pub slug: String,

    /// Owning user
    pub user_id: i32,
}

/// Input for creating a new task.
///
/// `user_id` comes from the request query string, not the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub content: String,
    pub priority: i32,
    pub user_id: i32,
}

/// Input for updating an existing task.
///
/// Full-replace semantics; slug and owner stay as created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

impl Task {
    /// Creates a new task, deriving the slug from the title.
    ///
    /// The caller is responsible for verifying that `data.user_id` refers to
    /// an existing user before calling this.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let slug = slugify(&data.title);

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, priority, slug, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, priority, slug, user_id
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(slug)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID. Returns `None` if no such row exists.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists all tasks owned by one user, in insertion order.
    ///
    /// An unknown user id simply yields an empty list.
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Overwrites every mutable field of an existing task.
    ///
    /// The slug and owner are left untouched. Returns the updated row, or
    /// `None` if the task doesn't exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2, content = $3, priority = $4
            WHERE id = $1
            RETURNING id, title, content, priority, slug, user_id
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
