//! Account API server.
//!
//! Public routes open accounts, list them, log in, and acknowledge
//! transfers. Routes under `/account/{id}` require an `x-jwt-token` issued
//! for that very account.
//!
//! ## Submodules
//!
//! - [`handlers`] — Request handlers
//! - [`config`] — Command line and environment configuration
mod config;
mod dto;
mod error;
pub mod handlers;
mod seed;

pub use config::*;
pub use dto::*;
pub use error::*;
pub use seed::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use bank_auth::Account;
use bank_auth::Crypto;
use bank_auth::Repository;
use std::sync::Arc;

/// Route table. Expects `web::Data<dyn Repository>` and `web::Data<Crypto>`
/// to be registered as app data.
#[rustfmt::skip]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
            web::JsonConfig::default()
                .error_handler(|e, _| ApiError::Decode(e.to_string()).into()),
        )
        .route("/health", web::get().to(handlers::health))
        .service(
            web::resource("/login")
                .route(web::post().to(handlers::login))
                .default_service(web::to(handlers::unsupported)),
        )
        .service(
            web::resource("/account")
                .route(web::get().to(handlers::list))
                .route(web::post().to(handlers::create))
                .default_service(web::to(handlers::unsupported)),
        )
        .service(
            web::resource("/account/{id}")
                .route(web::get().to(handlers::fetch))
                .route(web::delete().to(handlers::delete))
                .default_service(web::to(handlers::unsupported_owned)),
        )
        .service(
            web::resource("/transfer")
                .route(web::post().to(handlers::transfer))
                .default_service(web::to(handlers::unsupported)),
        );
}

/// Connects, migrates, optionally seeds, then serves until shutdown.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let client = bank_database::db(&config.database).await?;
    bank_database::migrate::<Account>(&client).await?;
    let accounts: Arc<dyn Repository> = Arc::new(client);
    if config.seed {
        log::info!("seeding the database");
        seed(accounts.as_ref()).await?;
    }
    if config.secret.is_empty() {
        log::warn!("JWT_SECRET is empty; logins and protected routes will fail");
    }
    let accounts = web::Data::from(accounts);
    let crypto = web::Data::new(Crypto::new(config.secret.as_bytes()));
    log::info!("starting server on {}", config.bind);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(accounts.clone())
            .app_data(crypto.clone())
            .configure(configure)
    });
    let server = match config.workers {
        Some(n) => server.workers(n),
        None => server,
    };
    server.bind(&config.bind)?.run().await?;
    Ok(())
}
