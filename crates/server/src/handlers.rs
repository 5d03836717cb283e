use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use bank_auth::Account;
use bank_auth::CreateAccountRequest;
use bank_auth::Crypto;
use bank_auth::LoginRequest;
use bank_auth::LoginResponse;
use bank_auth::Owner;
use bank_auth::Repository;
use bank_auth::password;
use bank_core::Unique;

pub async fn login(
    accounts: web::Data<dyn Repository>,
    crypto: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let LoginRequest { number, password } = req.into_inner();
    let account = accounts.by_number(number).await?;
    let hashword = account.hashword().to_owned();
    if !web::block(move || password::verify(&password, &hashword)).await? {
        return Err(ApiError::Credentials);
    }
    let token = crypto.issue(&account)?;
    log::info!("issued token for account #{}", account.number());
    Ok(HttpResponse::Ok().json(LoginResponse {
        number: account.number(),
        token,
    }))
}

pub async fn create(
    accounts: web::Data<dyn Repository>,
    req: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, ApiError> {
    let CreateAccountRequest {
        first_name,
        last_name,
        password,
    } = req.into_inner();
    let hashword = web::block(move || password::hash(&password)).await??;
    let account = accounts
        .create(&Account::new(first_name, last_name, hashword))
        .await?;
    log::info!("opened account {} (#{})", account.id(), account.number());
    Ok(HttpResponse::Ok().json(account))
}

pub async fn list(accounts: web::Data<dyn Repository>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(accounts.list().await?))
}

/// Serves the account the extractor already resolved for this request.
pub async fn fetch(owner: Owner) -> HttpResponse {
    HttpResponse::Ok().json(owner.account())
}

pub async fn delete(
    owner: Owner,
    accounts: web::Data<dyn Repository>,
) -> Result<HttpResponse, ApiError> {
    let id = owner.account().id();
    accounts.delete(id).await?;
    log::info!("closed account {} (#{})", id, owner.claims().number());
    Ok(HttpResponse::Ok().json(DeleteResponse { id }))
}

/// Acknowledges a transfer without touching any balance.
pub async fn transfer(req: web::Json<TransferRequest>) -> Result<HttpResponse, ApiError> {
    let transfer = req.into_inner();
    if transfer.amount <= 0 {
        return Err(ApiError::Invalid("amount must be positive"));
    }
    log::info!(
        "transfer of {} to account #{} acknowledged",
        transfer.amount,
        transfer.to_account
    );
    Ok(HttpResponse::Ok().json(transfer))
}

pub async fn health(accounts: web::Data<dyn Repository>) -> HttpResponse {
    match accounts
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Fallback for verbs a public path does not serve.
pub async fn unsupported() -> Result<HttpResponse, ApiError> {
    Err(ApiError::Method)
}

/// Fallback for verbs a protected path does not serve; authorizes first.
pub async fn unsupported_owned(_: Owner) -> Result<HttpResponse, ApiError> {
    Err(ApiError::Method)
}
