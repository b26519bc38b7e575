use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// A not-yet-stored account. `id`, `number` and `created_at` are filled in by the store.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Account {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }
}

/// Fields a caller may change on an existing account. `balance: None` leaves it as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountUpdate {
    pub first_name: String,
    pub last_name: String,
    pub balance: Option<i64>,
}
