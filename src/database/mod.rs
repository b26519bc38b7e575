mod memory;
mod postgres;

pub use memory::MemoryDatabase;
pub use postgres::PostgreDatabase;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;
use crate::models::{Account, AccountUpdate, StoreError};

/// Persistence operations for accounts.
///
/// Every method is a single independent statement; nothing here spans a transaction.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account. `id`, `number` and `created_at` are assigned by the store
    /// and the stored record is returned.
    async fn create_account(&self, account: &Account) -> Result<Account, StoreError>;
    /// All accounts. Callers should not depend on the order.
    async fn get_accounts(&self) -> Result<Vec<Account>, StoreError>;
    async fn get_account_by_id(&self, id: i32) -> Result<Account, StoreError>;
    async fn delete_account(&self, id: i32) -> Result<(), StoreError>;
    /// Apply `update` to the account `id` in one step and return the stored record
    async fn update_account(&self, id: i32, update: &AccountUpdate) -> Result<Account, StoreError>;
}

/// Connects to a PostgreSQL database described by `config`, returning a connection pool for accessing it
pub async fn connect_sqlx(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(config.max_connections)
        .min_connections(config.max_connections.min(4))
        .connect(&config.db_url)
        .await
}
