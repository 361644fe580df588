//! User model and database operations.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id SERIAL PRIMARY KEY,
//!     username VARCHAR(255) NOT NULL UNIQUE,
//!     firstname VARCHAR(255) NOT NULL,
//!     lastname VARCHAR(255) NOT NULL,
//!     age INTEGER NOT NULL,
//!     slug VARCHAR(255) NOT NULL
//! );
//! ```

use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A user account.
///
/// Users own zero or more tasks (see [`crate::models::task::Task`]).
/// The slug is derived from the username at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (generated by the database)
    pub id: i32,

    /// Human-readable handle, unique across all users
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,

    /// URL-safe form of the username, fixed at creation
    pub slug: String,
}

/// Input for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

/// Input for updating an existing user.
///
/// Updates are full-replace: every field here overwrites the stored value.
/// The slug is deliberately absent — it keeps the value computed at creation
/// even if the username changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

impl User {
    /// Creates a new user, deriving the slug from the username.
    ///
    /// # Errors
    ///
    /// Returns an error if the username already exists (unique constraint)
    /// or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let slug = slugify(&data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, firstname, lastname, age, slug
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID. Returns `None` if no such row exists.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Overwrites every mutable field of an existing user.
    ///
    /// The slug is left untouched. Returns the updated row, or `None` if the
    /// user doesn't exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, firstname = $3, lastname = $4, age = $5
            WHERE id = $1
            RETURNING id, username, firstname, lastname, age, slug
            "#,
        )
        .bind(id)
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user together with every task it owns.
    ///
    /// Both deletes run in one transaction: dependent tasks first, then the
    /// user. If the user row doesn't exist the transaction is rolled back
    /// and `false` is returned, leaving any tasks untouched.
    pub async fn delete_with_tasks(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
