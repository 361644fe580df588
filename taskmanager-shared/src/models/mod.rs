//! Database models for Taskmanager.
//!
//! Each model owns its CRUD operations as associated functions taking a
//! `&PgPool`, so handlers stay thin.
//!
//! - `user`: user accounts
//! - `task`: tasks owned by a user

pub mod task;
pub mod user;
