/// User domain type
use super::UserId;
use serde::{Deserialize, Serialize};

/// User account, created lazily on first reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name (unique)
    pub name: String,

    /// Account creation timestamp (unix seconds)
    pub created_at: i64,
}
