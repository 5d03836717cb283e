use super::*;
use bank_core::Id;
use bank_core::Number;
use bank_core::Unique;
use bank_database::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;
use tokio_postgres::error::SqlState;

const COLUMNS: &str = "id, first_name, last_name, number, encrypted_password, balance, created_at";

impl From<PgErr> for StoreError {
    fn from(e: PgErr) -> Self {
        Self::Backend(Box::new(e))
    }
}

fn hydrate(row: &Row) -> Account {
    Account::restore(
        row.get::<_, i64>(0),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get::<_, i64>(3),
        row.get::<_, String>(4),
        row.get::<_, i64>(5),
        row.get::<_, chrono::DateTime<chrono::Utc>>(6),
    )
}

#[async_trait::async_trait]
impl Repository for Arc<Client> {
    async fn create(&self, account: &Account) -> Result<Account, StoreError> {
        self.query_one(
            const_format::concatcp!(
                "INSERT INTO ",
                ACCOUNTS,
                " (first_name, last_name, number, encrypted_password, balance, created_at)
                  VALUES ($1, $2, $3, $4, $5, $6)
                  RETURNING id"
            ),
            &[
                &account.first_name(),
                &account.last_name(),
                &account.number(),
                &account.hashword(),
                &account.balance(),
                &account.created_at(),
            ],
        )
        .await
        .map(|row| account.clone().saved(row.get::<_, i64>(0)))
        .map_err(|e| match e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
            true => StoreError::Duplicate(account.number()),
            false => StoreError::from(e),
        })
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        match self
            .execute(
                const_format::concatcp!(
                    "UPDATE ",
                    ACCOUNTS,
                    " SET first_name = $2, last_name = $3, encrypted_password = $4, balance = $5
                      WHERE id = $1"
                ),
                &[
                    &account.id(),
                    &account.first_name(),
                    &account.last_name(),
                    &account.hashword(),
                    &account.balance(),
                ],
            )
            .await?
        {
            0 => Err(StoreError::id(account.id())),
            _ => Ok(()),
        }
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self
            .query(
                const_format::concatcp!("SELECT ", COLUMNS, " FROM ", ACCOUNTS, " ORDER BY id"),
                &[],
            )
            .await?
            .iter()
            .map(hydrate)
            .collect())
    }

    async fn by_id(&self, id: Id) -> Result<Account, StoreError> {
        self.query_opt(
            const_format::concatcp!("SELECT ", COLUMNS, " FROM ", ACCOUNTS, " WHERE id = $1"),
            &[&id],
        )
        .await?
        .as_ref()
        .map(hydrate)
        .ok_or_else(|| StoreError::id(id))
    }

    async fn by_number(&self, number: Number) -> Result<Account, StoreError> {
        self.query_opt(
            const_format::concatcp!("SELECT ", COLUMNS, " FROM ", ACCOUNTS, " WHERE number = $1"),
            &[&number],
        )
        .await?
        .as_ref()
        .map(hydrate)
        .ok_or_else(|| StoreError::number(number))
    }

    async fn remove(&self, id: Id) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", ACCOUNTS, " WHERE id = $1"),
            &[&id],
        )
        .await
        .map(|_| ())
        .map_err(StoreError::from)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.execute("SELECT 1", &[])
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}
