/*!
 * Tests for the project repository
 */

use pipetrack::database::{DatabaseConnection, ProjectDraft, ProjectRepository};
use pipetrack::errors::{StoreError, ValidationError};

use crate::common;

fn repository() -> ProjectRepository {
    ProjectRepository::new_in_memory().expect("Failed to create in-memory repository")
}

/// Test create followed by point lookup
#[test]
fn test_createProject_thenGetProject_shouldReturnTrimmedRecord() {
    let repo = repository();

    let id = repo
        .create_project(&ProjectDraft::new("  Bridge Survey  ", "  /data/site1 "))
        .expect("Create should succeed");

    let record = repo.get_project(id).expect("Project should exist");
    assert_eq!(record.id, id);
    assert_eq!(record.name, "Bridge Survey");
    assert_eq!(record.location, "/data/site1");
    assert!(!record.created_at.is_empty());
}

/// Test all operations against identifiers that are not present
#[test]
fn test_operations_withUnknownId_shouldReturnNotFound() {
    let repo = repository();

    assert!(matches!(repo.get_project(1), Err(StoreError::NotFound(1))));
    assert!(matches!(
        repo.update_project(1, &ProjectDraft::new("Name", "/data")),
        Err(StoreError::NotFound(1))
    ));
    assert!(matches!(
        repo.delete_project(1),
        Err(StoreError::NotFound(1))
    ));
}

/// Test that rejected input never creates a record
#[test]
fn test_createProject_withWhitespaceOnlyInput_shouldNotChangeCount() {
    let repo = repository();

    let name_result = repo.create_project(&ProjectDraft::new("   ", "/data/site1"));
    assert!(matches!(
        name_result,
        Err(StoreError::InvalidInput(ValidationError::EmptyName))
    ));

    let location_result = repo.create_project(&ProjectDraft::new("Bridge Survey", "  "));
    assert!(matches!(
        location_result,
        Err(StoreError::InvalidInput(ValidationError::EmptyLocation))
    ));

    assert!(repo.get_all_projects().unwrap().is_empty());
}

/// Test update changes exactly the targeted record and nothing else
#[test]
fn test_updateProject_shouldOnlyTouchNameAndLocationOfTarget() {
    let repo = repository();

    let first = repo
        .create_project(&ProjectDraft::new("Bridge Survey", "/data/site1"))
        .unwrap();
    let second = repo
        .create_project(&ProjectDraft::new("Tower Inspection", "/data/site2"))
        .unwrap();

    let first_before = repo.get_project(first).unwrap();

    repo.update_project(first, &ProjectDraft::new("Bridge Survey Phase 2", "/data/site1"))
        .expect("Update should succeed");

    let first_after = repo.get_project(first).unwrap();
    assert_eq!(first_after.id, first_before.id);
    assert_eq!(first_after.created_at, first_before.created_at);
    assert_eq!(first_after.name, "Bridge Survey Phase 2");

    let second_after = repo.get_project(second).unwrap();
    assert_eq!(second_after.name, "Tower Inspection");
}

/// Test delete removes the record from point lookup and the listing
#[test]
fn test_deleteProject_shouldRemoveFromLookupAndListing() {
    let repo = repository();

    let keep = repo
        .create_project(&ProjectDraft::new("Bridge Survey", "/data/site1"))
        .unwrap();
    let gone = repo
        .create_project(&ProjectDraft::new("Tower Inspection", "/data/site2"))
        .unwrap();

    repo.delete_project(gone).expect("Delete should succeed");

    assert!(matches!(
        repo.get_project(gone),
        Err(StoreError::NotFound(_))
    ));

    let ids: Vec<i64> = repo
        .get_all_projects()
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![keep]);
}

/// Test listing order: created A, B, C comes back [C, B, A]
#[test]
fn test_getAllProjects_shouldReturnCreationOrderReversed() {
    let repo = repository();

    let a = repo.create_project(&ProjectDraft::new("A", "/a")).unwrap();
    let b = repo.create_project(&ProjectDraft::new("B", "/b")).unwrap();
    let c = repo.create_project(&ProjectDraft::new("C", "/c")).unwrap();

    let ids: Vec<i64> = repo
        .get_all_projects()
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec![c, b, a]);
}

/// Test storage failures surface as Unavailable, never as NotFound
#[test]
fn test_operations_withBrokenStore_shouldReturnUnavailable() {
    let repo = repository();
    let id = repo
        .create_project(&ProjectDraft::new("Bridge Survey", "/data/site1"))
        .unwrap();

    // Break the store out from under the repository
    repo.connection()
        .execute(|conn| {
            conn.execute_batch("DROP TABLE projects;")?;
            Ok(())
        })
        .expect("Failed to drop table");

    assert!(matches!(
        repo.get_project(id),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        repo.get_all_projects(),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        repo.update_project(id, &ProjectDraft::new("Name", "/data")),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        repo.delete_project(id),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        repo.create_project(&ProjectDraft::new("Name", "/data")),
        Err(StoreError::Unavailable(_))
    ));
}

/// Test rows stamped by the column default sort consistently with repository inserts
#[test]
fn test_getAllProjects_withDefaultStampedRow_shouldKeepNewestFirst() {
    let repo = repository();

    // Row created outside the repository, timestamp from the column default
    repo.connection()
        .execute(|conn| {
            conn.execute(
                "INSERT INTO projects (name, location) VALUES ('Legacy Import', '/data/legacy')",
                [],
            )?;
            Ok(())
        })
        .expect("Failed to insert row");

    let newer = repo
        .create_project(&ProjectDraft::new("Bridge Survey", "/data/site1"))
        .unwrap();

    let records = repo.get_all_projects().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, newer);
    assert_eq!(records[1].name, "Legacy Import");

    // Both timestamp sources share the same lexicographic shape
    for record in &records {
        assert!(record.created_at.contains('T'), "{}", record.created_at);
        assert!(record.created_at.ends_with("+00:00"), "{}", record.created_at);
    }
}

/// Test records survive a reopen of the same database file
#[test]
fn test_repository_withOnDiskDatabase_shouldPersistAcrossReopen() {
    let temp_dir = common::create_temp_dir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("projects.db");

    let id = {
        let repo = ProjectRepository::new(
            DatabaseConnection::new(&db_path).expect("Failed to open database"),
        );
        repo.create_project(&ProjectDraft::new("Bridge Survey", "/data/site1"))
            .expect("Create should succeed")
    };

    let repo = ProjectRepository::new(
        DatabaseConnection::new(&db_path).expect("Failed to reopen database"),
    );
    let record = repo.get_project(id).expect("Record should survive reopen");
    assert_eq!(record.name, "Bridge Survey");
}
