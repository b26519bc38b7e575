use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::AccountStore;
use crate::models::{Account, AccountUpdate, StoreError};

#[derive(Default)]
struct Inner {
    accounts: BTreeMap<i32, Account>,
    last_id: i32,
    last_number: i64,
}

/// Map-backed `AccountStore` standing in for Postgres in tests
#[derive(Default)]
pub struct MemoryDatabase {
    inner: Mutex<Inner>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryDatabase {
    async fn create_account(&self, new_account: &Account) -> Result<Account, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        inner.last_number += 1;

        let account = Account {
            id: inner.last_id,
            number: inner.last_number,
            created_at: Utc::now(),
            first_name: new_account.first_name.clone(),
            last_name: new_account.last_name.clone(),
            balance: new_account.balance,
        };
        inner.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.accounts.values().cloned().collect())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StoreError> {
        let inner = self.inner.lock().await;
        inner
            .accounts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete_account(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner
            .accounts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_account(&self, id: i32, update: &AccountUpdate) -> Result<Account, StoreError> {
        let mut inner = self.inner.lock().await;
        let stored = inner
            .accounts
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        stored.first_name = update.first_name.clone();
        stored.last_name = update.last_name.clone();
        if let Some(balance) = update.balance {
            stored.balance = balance;
        }
        Ok(stored.clone())
    }
}
