/*!
 * # pipetrack
 *
 * A Rust library for tracking named projects with a storage location,
 * backed by a local SQLite store with localized display text.
 *
 * ## Features
 *
 * - Create, read, update, and delete project records
 * - Storage-assigned identifiers and creation timestamps
 * - Localized display strings selected by a configuration file,
 *   with fallback to a default language
 * - Right-to-left display hint per language
 * - Export of one project's display fields for document rendering
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite persistence:
 *   - `database::connection`: Connection lifecycle
 *   - `database::schema`: Table definitions and migrations
 *   - `database::models`: Project record and draft types
 *   - `database::repository`: CRUD operations
 * - `localization`: Translation catalog service
 * - `language_utils`: ISO language code utilities
 * - `export`: Display-field export for one project
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;
pub mod export;
pub mod language_utils;
pub mod localization;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::{DatabaseConnection, ProjectDraft, ProjectRecord, ProjectRepository};
pub use errors::{AppError, LocalizationError, StoreError, ValidationError};
pub use localization::{Catalog, Localizer};
