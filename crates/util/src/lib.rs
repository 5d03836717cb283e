//! Core type aliases, constants, and runtime utilities for bank.
//!
//! Everything here is shared by the auth, database, and server crates and
//! carries no I/O of its own outside the `server` feature.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Internal account key, assigned by the repository on insert.
pub type Id = i64;
/// Public account number, used as the login and token-binding key.
pub type Number = i64;
/// Account balance in minor units. Informational only.
pub type Balance = i64;

// ============================================================================
// TRAITS
// ============================================================================
/// Entities addressable by a repository-assigned key.
pub trait Unique {
    fn id(&self) -> Id;
}

// ============================================================================
// ACCOUNT PARAMETERS
// ============================================================================
/// Half-open range public account numbers are drawn from.
pub const NUMBERS: std::ops::Range<Number> = 0..999_999;
/// Key carried by an account that has not been persisted yet.
pub const UNSAVED: Id = 0;

// ============================================================================
// TOKEN PARAMETERS
// ============================================================================
/// Lifetime of an issued access token.
pub const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(15 * 60);
/// Request header carrying the access token.
pub const TOKEN_HEADER: &str = "x-jwt-token";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory that receives one log file per process start.
#[cfg(feature = "server")]
pub const LOG_DIR: &str = "logs";

/// Terminal logging at INFO plus a DEBUG file under [`LOG_DIR`] named by
/// start time. Fails if the file cannot be created or a logger is already set.
#[cfg(feature = "server")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all(LOG_DIR)?;
    let started = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let path = std::path::Path::new(LOG_DIR).join(format!("bank-{}.log", started));
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, std::fs::File::create(path)?),
    ])
    .map_err(std::io::Error::other)
}

/// Register Ctrl+C handler for immediate termination.
/// In-flight requests are dropped; nothing here needs draining.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("failed to listen for interrupt: {}", e);
            return;
        }
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
