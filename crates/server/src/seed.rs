use super::*;
use bank_auth::Account;
use bank_auth::Repository;
use bank_auth::password;

/// Demo account inserted by `--seed`: first name, last name, password.
pub const DEMO: (&str, &str, &str) = ("antony", "GG", "hunter8888");

/// Opens the demo account.
pub async fn seed(accounts: &dyn Repository) -> Result<Account, ApiError> {
    let (first, last, secret) = DEMO;
    let account = Account::new(first.to_owned(), last.to_owned(), password::hash(secret)?);
    let account = accounts.create(&account).await?;
    log::info!("seeded account #{} ({} {})", account.number(), first, last);
    Ok(account)
}
