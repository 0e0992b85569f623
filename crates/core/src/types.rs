/// All timestamps are UTC. Serialized as ISO-8601 (RFC 3339) strings.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Key assigned by the remote store when a record is appended.
pub type ResponseKey = String;
