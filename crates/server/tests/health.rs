mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use bank_auth::Account;
use bank_auth::Memory;
use bank_auth::Repository;
use bank_auth::StoreError;
use bank_core::Id;
use bank_core::Number;
use std::sync::Arc;

/// Repository whose database is unreachable.
struct Offline;

fn down() -> StoreError {
    StoreError::Backend("connection refused".into())
}

#[async_trait::async_trait]
impl Repository for Offline {
    async fn create(&self, _: &Account) -> Result<Account, StoreError> {
        Err(down())
    }
    async fn update(&self, _: &Account) -> Result<(), StoreError> {
        Err(down())
    }
    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Err(down())
    }
    async fn by_id(&self, _: Id) -> Result<Account, StoreError> {
        Err(down())
    }
    async fn by_number(&self, _: Number) -> Result<Account, StoreError> {
        Err(down())
    }
    async fn remove(&self, _: Id) -> Result<(), StoreError> {
        Err(down())
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

#[actix_web::test]
async fn health_answers_ok() {
    let app = test::init_service(common::app(Arc::new(Memory::new()))).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "ok");
}

#[actix_web::test]
async fn unreachable_database_is_unavailable() {
    let app = test::init_service(common::app_with(Arc::new(Offline))).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(test::read_body(resp).await, "database unavailable");
}

#[actix_web::test]
async fn protected_route_is_denied_when_storage_fails() {
    let app = test::init_service(common::app_with(Arc::new(Offline))).await;
    let holder = Account::new("A".into(), "B".into(), String::new());
    let token = bank_auth::Crypto::new(common::SECRET).issue(&holder).unwrap();
    let req = test::TestRequest::get()
        .uri("/account/1")
        .insert_header((bank_core::TOKEN_HEADER, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "Error": "permission denied" }));
}
