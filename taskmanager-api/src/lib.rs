//! # Taskmanager API Server Library
//!
//! Core functionality for the Taskmanager API server.
//!
//! ## Modules
//!
//! - `app`: application state and router builder
//! - `config`: configuration management
//! - `error`: error handling and HTTP response mapping
//! - `routes`: route handlers for the user and task resources

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
