//! # Taskmanager Shared Library
//!
//! Shared types and database logic used by the Taskmanager API server.
//!
//! ## Module Organization
//!
//! - `db`: connection pool management and migrations
//! - `models`: database models (User, Task) and their CRUD operations
//! - `slug`: URL-safe slug derivation for usernames and task titles

pub mod db;
pub mod models;
pub mod slug;

/// Current version of the Taskmanager shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
