use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use bank_auth::Envelope;
use bank_auth::StoreError;
use bank_auth::TokenError;
use bank_auth::password::HashError;

/// Every way a handler can fail. All of them answer 400 with the message
/// in an [`Envelope`]; authorization failures never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Decode(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("not authenticated")]
    Credentials,
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("invalid method")]
    Method,
    #[error("{0}")]
    Invalid(&'static str),
    #[error("worker pool unavailable")]
    Blocking,
}

impl From<HashError> for ApiError {
    fn from(e: HashError) -> Self {
        Self::Hash(e.to_string())
    }
}

impl From<BlockingError> for ApiError {
    fn from(_: BlockingError) -> Self {
        Self::Blocking
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn error_response(&self) -> HttpResponse {
        log::warn!("request failed: {}", self);
        HttpResponse::build(self.status_code()).json(Envelope::new(self))
    }
}
