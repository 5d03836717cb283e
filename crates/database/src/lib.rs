//! PostgreSQL connectivity for the account store.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a connection string
//! - [`migrate()`] — Creates a [`Schema`] table and its indices idempotently
//!
//! ## Table Names
//!
//! Constants for all persistent entities.
mod traits;

pub use traits::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// The connection task is spawned onto the current runtime; the returned
/// `Arc<Client>` is shared by every request handler.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Creates the table behind `S` if missing, then its indices.
pub async fn migrate<S: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("migrating table ({})", S::name());
    client.batch_execute(&S::migration()).await
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for customer accounts.
#[rustfmt::skip]
pub const ACCOUNTS: &str = "account";
