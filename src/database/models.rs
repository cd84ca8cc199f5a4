/*!
 * Database entity models and DTOs.
 *
 * These structures map directly to database rows and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A persisted project row
///
/// Identifier and creation timestamp are storage-assigned at insert time
/// and never change afterwards; update touches only name and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Storage-assigned identifier, unique and immutable
    pub id: i64,
    /// Project name, non-empty
    pub name: String,
    /// Filesystem path or address where the project lives, non-empty
    pub location: String,
    /// RFC 3339 timestamp assigned by the store at insert time
    pub created_at: String,
}

/// A not-yet-created project as entered by the user
///
/// Drafts carry raw user input; `validate` trims both fields and rejects
/// empty values before any storage mutation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Project name as entered
    pub name: String,
    /// Project location as entered
    pub location: String,
}

impl ProjectDraft {
    /// Create a draft from raw user input
    pub fn new<S: Into<String>, T: Into<String>>(name: S, location: T) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Trim both fields and reject empty values
    ///
    /// Returns the trimmed (name, location) pair that is safe to persist.
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationError::EmptyLocation);
        }

        Ok((name.to_string(), location.to_string()))
    }
}
