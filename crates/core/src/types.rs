/// Chatbot and user primary keys are opaque text ids (cuid-style).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
