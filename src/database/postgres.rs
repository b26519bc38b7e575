use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::AccountStore;
use crate::models::{Account, AccountUpdate, StoreError};

const CREATE_ACCOUNT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS account (
        id SERIAL PRIMARY KEY,
        first_name VARCHAR(50) NOT NULL,
        last_name VARCHAR(50) NOT NULL,
        number BIGSERIAL UNIQUE,
        balance BIGINT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

pub struct PostgreDatabase {
    sqlx_db: PgPool,
}

impl PostgreDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgreDatabase { sqlx_db }
    }

    /// Create the `account` table if it does not exist yet. Safe to run on every startup.
    pub async fn init(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_ACCOUNT_TABLE)
            .execute(&self.sqlx_db)
            .await?;
        info!("account table ready");
        Ok(())
    }
}

#[async_trait]
impl AccountStore for PostgreDatabase {
    async fn create_account(&self, new_account: &Account) -> Result<Account, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO account (first_name, last_name, balance)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(new_account.balance)
        .fetch_one(&self.sqlx_db)
        .await?;

        Ok(account)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, StoreError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            ORDER BY id
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await?;

        Ok(accounts)
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn delete_account(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn update_account(&self, id: i32, update: &AccountUpdate) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE account
            SET first_name = $1,
                last_name = $2,
                balance = COALESCE($3, balance)
            WHERE id = $4
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(update.balance)
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await?
        .ok_or(StoreError::NotFound(id))
    }
}
