//! Account Service Binary
//!
//! Serves the account API on BIND_ADDR (default 0.0.0.0:3000).
//! Requires DB_URL and JWT_SECRET; pass --seed to insert a demo account.
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = bank_server::Config::parse();
    bank_core::log()?;
    bank_core::kys();
    bank_server::run(config).await
}
