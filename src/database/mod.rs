/*!
 * Database module for persistent storage of projects.
 *
 * This module provides SQLite-based persistence for the project table,
 * split into connection management, schema, entity models, and the
 * repository that exposes the CRUD operations.
 */

// Allow dead code - database types are for library consumers
#![allow(dead_code)]

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::DatabaseConnection;
pub use models::{ProjectDraft, ProjectRecord};
pub use repository::ProjectRepository;
