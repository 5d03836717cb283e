//! Accounts, credentials, and request authorization.
//!
//! JWT-based authorization with Argon2 password hashing. A token is bound to
//! exactly one account number; protected routes only serve the account the
//! token was issued for.
//!
//! ## Domain
//!
//! - [`Account`] — Customer account with public number and hashed password
//! - [`Repository`] — Storage seam for accounts
//! - [`Memory`] — In-process repository for tests and local runs
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`password`] — Argon2 hashing and verification
//! - [`Owner`] — Extractor that authorizes a request against `{id}`
mod account;
mod claims;
mod crypto;
mod dto;
mod memory;
pub mod password;
mod repository;

pub use account::*;
pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use memory::*;
pub use repository::*;

#[cfg(feature = "database")]
mod postgres;

#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use middleware::*;
