use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored resume. `original_text` never changes after creation;
/// `improved_text` holds the latest successful improvement, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub original_text: String,
    pub improved_text: Option<String>,
    pub created_at: DateTime<Utc>,
}
