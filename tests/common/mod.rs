/*!
 * Common test utilities for the pipetrack test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a language resource file for the given code
pub fn create_language_resource(dir: &Path, code: &str, content: &str) -> Result<PathBuf> {
    create_test_file(dir, &format!("{}.json", code), content)
}

/// A minimal English resource used across tests
pub const EN_RESOURCE: &str = r#"{
    "app_title": "Pipetrack",
    "project_name": "Name",
    "project_location": "Location",
    "project_not_found": "Project not found"
}"#;

/// A minimal Arabic resource used across tests
pub const AR_RESOURCE: &str = r#"{
    "app_title": "بايبتراك",
    "project_name": "الاسم"
}"#;
