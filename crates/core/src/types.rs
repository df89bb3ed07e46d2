use uuid::Uuid;

/// Record identifiers are UUIDv7, so they sort in creation order.
pub type DbId = Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh record identifier.
pub fn new_id() -> DbId {
    Uuid::now_v7()
}

/// Parse an identifier received as text. Returns `None` for anything that
/// is not a well-formed UUID.
pub fn parse_id(raw: &str) -> Option<DbId> {
    Uuid::parse_str(raw.trim()).ok()
}
