/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for project persistence,
 * abstracting away the SQL details and providing type-safe access.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::connection::DatabaseConnection;
use super::models::{ProjectDraft, ProjectRecord};
use crate::errors::StoreError;

/// Repository for project records
///
/// Operations distinguish a missing record (`StoreError::NotFound`) from a
/// store that cannot be reached (`StoreError::Unavailable`) so callers can
/// decide how to degrade.
#[derive(Clone)]
pub struct ProjectRepository {
    /// Database connection
    db: DatabaseConnection,
}

impl ProjectRepository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert a new project and return its storage-assigned identifier
    ///
    /// The draft is validated first; nothing is written when validation fails.
    pub fn create_project(&self, draft: &ProjectDraft) -> Result<i64, StoreError> {
        let (name, location) = draft.validate()?;
        let created_at = chrono::Utc::now().to_rfc3339();

        let id = self
            .db
            .execute(|conn| {
                conn.execute(
                    "INSERT INTO projects (name, location, created_at) VALUES (?1, ?2, ?3)",
                    params![name, location, created_at],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .map_err(StoreError::Unavailable)?;

        debug!("Project created with id {}", id);
        Ok(id)
    }

    /// Look up a single project by identifier
    pub fn get_project(&self, id: i64) -> Result<ProjectRecord, StoreError> {
        let record = self
            .db
            .execute(|conn| Self::get_project_sync(conn, id))
            .map_err(StoreError::Unavailable)?;

        record.ok_or(StoreError::NotFound(id))
    }

    /// Look up a single project by identifier (synchronous helper for transactions)
    fn get_project_sync(conn: &Connection, id: i64) -> Result<Option<ProjectRecord>> {
        let result = conn
            .query_row(
                "SELECT id, name, location, created_at FROM projects WHERE id = ?1",
                [id],
                |row| {
                    Ok(ProjectRecord {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        location: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()?;

        Ok(result)
    }

    /// Get every project, newest first
    ///
    /// Ordered by creation timestamp descending with identifier as the
    /// tie-breaker, so insertion order is stable within one timestamp tick.
    pub fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.db
            .execute(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, name, location, created_at FROM projects
                     ORDER BY created_at DESC, id DESC",
                )?;

                let records = stmt
                    .query_map([], |row| {
                        Ok(ProjectRecord {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            location: row.get(2)?,
                            created_at: row.get(3)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(records)
            })
            .map_err(StoreError::Unavailable)
    }

    /// Update name and location of an existing project
    ///
    /// Identifier and creation timestamp are never touched.
    pub fn update_project(&self, id: i64, draft: &ProjectDraft) -> Result<(), StoreError> {
        let (name, location) = draft.validate()?;

        let rows = self
            .db
            .execute(|conn| {
                let rows = conn.execute(
                    "UPDATE projects SET name = ?1, location = ?2 WHERE id = ?3",
                    params![name, location, id],
                )?;
                Ok(rows)
            })
            .map_err(StoreError::Unavailable)?;

        if rows == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!("Project {} updated", id);
        Ok(())
    }

    /// Remove a project permanently
    pub fn delete_project(&self, id: i64) -> Result<(), StoreError> {
        let rows = self
            .db
            .execute(|conn| {
                let rows = conn.execute("DELETE FROM projects WHERE id = ?1", [id])?;
                Ok(rows)
            })
            .map_err(StoreError::Unavailable)?;

        if rows == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!("Project {} deleted", id);
        Ok(())
    }

    /// Count all projects
    pub fn count_projects(&self) -> Result<i64, StoreError> {
        self.db
            .execute(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
                Ok(count)
            })
            .map_err(StoreError::Unavailable)
    }
}
