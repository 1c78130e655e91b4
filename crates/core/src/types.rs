/// All database primary keys are UUIDs (generated as UUIDv7 on insert).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
