//! One-way credential hashing.
//!
//! Hashes are PHC strings carrying their own salt and parameters, so
//! [`verify`] needs nothing but the stored string.
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

pub type HashError = argon2::password_hash::Error;

fn salt() -> Result<SaltString, HashError> {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes)
}

/// Hashes `password` under a fresh random salt.
pub fn hash(password: &str) -> Result<String, HashError> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt()?)
        .map(|h| h.to_string())
}

/// Mismatches and unparseable hashes both yield `false`.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .map(|ref hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}
