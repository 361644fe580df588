//! API route handlers organized by resource.
//!
//! - `root`: welcome payload
//! - `health`: health check endpoint
//! - `user`: user resource controller
//! - `task`: task resource controller

pub mod health;
pub mod root;
pub mod task;
pub mod user;
