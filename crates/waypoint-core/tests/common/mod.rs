use waypoint_core::{Database, Plan};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// The three-step plan used across scenarios
pub fn offsite_plan() -> Plan {
    Plan::new(["Pick date", "Book venue", "Send invites"]).expect("valid plan")
}
