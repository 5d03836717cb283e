use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::web;
use bank_core::Id;
use std::future::Future;
use std::pin::Pin;

/// The single outcome of a failed authorization.
/// Causes are logged, never returned to the caller.
#[derive(Debug, thiserror::Error)]
#[error("permission denied")]
pub struct Denied;

impl Denied {
    fn because(reason: impl std::fmt::Display) -> Self {
        log::debug!("denied: {}", reason);
        Self
    }
    fn miswired(missing: &str) -> Self {
        log::error!("denied: {} not configured", missing);
        Self
    }
}

impl ResponseError for Denied {
    fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Envelope::new(self))
    }
}

/// Extractor for routes scoped to one account by an `{id}` path segment.
///
/// Succeeds only when the `x-jwt-token` header holds a valid token whose
/// account number matches the account stored under `{id}`.
pub struct Owner {
    claims: Claims,
    account: Account,
}

impl Owner {
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
    pub fn account(&self) -> &Account {
        &self.account
    }
}

impl FromRequest for Owner {
    type Error = Denied;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let crypto = req.app_data::<web::Data<Crypto>>().cloned();
        let accounts = req.app_data::<web::Data<dyn Repository>>().cloned();
        let token = req
            .headers()
            .get(bank_core::TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_owned());
        let id = req.match_info().get("id").map(|s| s.to_owned());
        Box::pin(async move {
            let token = token.ok_or_else(|| Denied::because("missing token header"))?;
            let crypto = crypto.ok_or_else(|| Denied::miswired("token service"))?;
            let claims = crypto.validate(&token).map_err(Denied::because)?;
            let id = id
                .ok_or_else(|| Denied::because("route has no {id} segment"))?
                .parse::<Id>()
                .map_err(|e| Denied::because(format!("malformed account id: {}", e)))?;
            let accounts = accounts.ok_or_else(|| Denied::miswired("account repository"))?;
            let account = accounts.by_id(id).await.map_err(Denied::because)?;
            if account.number() != claims.number() {
                return Err(Denied::because(format!(
                    "token for account #{} used on account #{}",
                    claims.number(),
                    account.number()
                )));
            }
            Ok(Owner { claims, account })
        })
    }
}
