#![allow(dead_code)]
use actix_web::App;
use actix_web::dev::ServiceFactory;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;
use actix_web::web;
use bank_auth::Crypto;
use bank_auth::Memory;
use bank_auth::Repository;
use bank_core::Id;
use bank_core::Number;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;

pub const SECRET: &[u8] = b"integration secret";
pub const PASSWORD: &str = "pw123456";

pub fn app(
    memory: Arc<Memory>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_with(memory)
}

/// Same routes over any repository, for failure-mode tests.
pub fn app_with(
    accounts: Arc<dyn Repository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(accounts))
        .app_data(web::Data::new(Crypto::new(SECRET)))
        .configure(bank_server::configure)
}

pub fn open(first: &str, last: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/account")
        .set_json(json!({ "firstName": first, "lastName": last, "password": password }))
}

pub fn login(number: Number, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/login")
        .set_json(json!({ "number": number, "password": password }))
}

pub fn owned(req: TestRequest, id: Id, token: &str) -> TestRequest {
    req.uri(&format!("/account/{}", id))
        .insert_header((bank_core::TOKEN_HEADER, token))
}

pub fn id(account: &Value) -> Id {
    account["id"].as_i64().expect("account id")
}

pub fn number(account: &Value) -> Number {
    account["number"].as_i64().expect("account number")
}

/// True if any string in `value` looks like a stored password hash.
pub fn leaks_hash(value: &Value) -> bool {
    value.to_string().contains("$argon2")
        || value.to_string().contains("encryptedPassword")
        || value.to_string().contains("hashword")
}
