use super::*;
use bank_core::Id;
use bank_core::Number;
use bank_core::Unique;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-process [`Repository`].
///
/// Mirrors the PostgreSQL adapter: serial keys starting at 1, unique
/// account numbers, and no key reuse after deletion.
#[derive(Debug, Default)]
pub struct Memory {
    inner: RwLock<Rows>,
}

#[derive(Debug, Default)]
struct Rows {
    serial: Id,
    accounts: BTreeMap<Id, Account>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Repository for Memory {
    async fn create(&self, account: &Account) -> Result<Account, StoreError> {
        let mut rows = self.inner.write().await;
        if rows.accounts.values().any(|a| a.number() == account.number()) {
            return Err(StoreError::Duplicate(account.number()));
        }
        rows.serial += 1;
        let saved = account.clone().saved(rows.serial);
        rows.accounts.insert(saved.id(), saved.clone());
        Ok(saved)
    }
    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .accounts
            .get_mut(&account.id())
            .map(|row| row.amend(account))
            .ok_or_else(|| StoreError::id(account.id()))
    }
    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }
    async fn by_id(&self, id: Id) -> Result<Account, StoreError> {
        self.inner
            .read()
            .await
            .accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::id(id))
    }
    async fn by_number(&self, number: Number) -> Result<Account, StoreError> {
        self.inner
            .read()
            .await
            .accounts
            .values()
            .find(|a| a.number() == number)
            .cloned()
            .ok_or_else(|| StoreError::number(number))
    }
    async fn remove(&self, id: Id) -> Result<(), StoreError> {
        self.inner.write().await.accounts.remove(&id);
        Ok(())
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
