use super::*;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

/// Algorithm tokens are signed with.
const SIGNING: Algorithm = Algorithm::HS256;
/// Header algorithms accepted on validation. Anything else is rejected
/// before the signature is looked at.
const ALLOWED: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("signing key unavailable")]
    Keyless,
    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),
    #[error("token algorithm {0:?} not allowed")]
    Algorithm(Algorithm),
    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// Stateless token service over one symmetric secret.
///
/// Rotating the secret invalidates every token issued under the old one.
pub struct Crypto {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    keyless: bool,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(SIGNING);
        validation.algorithms = ALLOWED.to_vec();
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            keyless: secret.is_empty(),
        }
    }
    /// Issues a fresh token for `account`.
    pub fn issue(&self, account: &Account) -> Result<String, TokenError> {
        self.encode(&Claims::new(account.number()))
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        if self.keyless {
            return Err(TokenError::Keyless);
        }
        jsonwebtoken::encode(&Header::new(SIGNING), claims, &self.encoding)
            .map_err(TokenError::Signing)
    }
    /// Checks algorithm, signature, structure, and expiry.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        if self.keyless {
            return Err(TokenError::Keyless);
        }
        let header = jsonwebtoken::decode_header(token).map_err(TokenError::Invalid)?;
        if !ALLOWED.contains(&header.alg) {
            return Err(TokenError::Algorithm(header.alg));
        }
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)?;
        match claims.expired() {
            true => Err(TokenError::Invalid(
                jsonwebtoken::errors::ErrorKind::ExpiredSignature.into(),
            )),
            false => Ok(claims),
        }
    }
}
