use super::*;
use bank_core::Id;
use bank_core::Number;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}: no such account")]
    NotFound(String),
    #[error("account number {0} already taken")]
    Duplicate(Number),
    #[error("storage failure: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn id(id: Id) -> Self {
        Self::NotFound(format!("account id {}", id))
    }
    pub fn number(number: Number) -> Self {
        Self::NotFound(format!("account number {}", number))
    }
}

/// Storage seam for accounts.
/// Each call is one logical operation; atomicity across calls is not promised.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    /// Persists an unsaved account and returns it under its assigned key.
    async fn create(&self, account: &Account) -> Result<Account, StoreError>;
    /// Overwrites names, hash, and balance of an existing account.
    async fn update(&self, account: &Account) -> Result<(), StoreError>;
    /// Every account, oldest key first.
    async fn list(&self) -> Result<Vec<Account>, StoreError>;
    async fn by_id(&self, id: Id) -> Result<Account, StoreError>;
    async fn by_number(&self, number: Number) -> Result<Account, StoreError>;
    /// Unconditionally removes the row keyed `id`.
    async fn remove(&self, id: Id) -> Result<(), StoreError>;
    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;
    /// Removes an account after checking it exists; a missing account
    /// short-circuits with the lookup error and never reaches [`remove`](Self::remove).
    async fn delete(&self, id: Id) -> Result<(), StoreError> {
        self.by_id(id).await?;
        self.remove(id).await
    }
}
