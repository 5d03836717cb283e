mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use bank_auth::Memory;
use bank_auth::Repository;
use bank_auth::StoreError;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;

#[actix_web::test]
async fn opened_account_is_numbered_and_hides_its_hash() {
    let app = test::init_service(common::app(Arc::new(Memory::new()))).await;
    let req = common::open("A", "B", common::PASSWORD).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["firstName"], "A");
    assert_eq!(body["lastName"], "B");
    assert_eq!(body["balance"], 0);
    assert!(bank_core::NUMBERS.contains(&common::number(&body)));
    assert!(common::id(&body) > 0);
    assert!(body.get("password").is_none());
    assert!(!common::leaks_hash(&body));
}

#[actix_web::test]
async fn owner_reads_back_what_was_opened() {
    let app = test::init_service(common::app(Arc::new(Memory::new()))).await;
    let req = common::open("Ada", "Lovelace", common::PASSWORD).to_request();
    let resp = test::call_service(&app, req).await;
    let opened: Value = test::read_body_json(resp).await;
    let req = common::login(common::number(&opened), common::PASSWORD).to_request();
    let resp = test::call_service(&app, req).await;
    let login: Value = test::read_body_json(resp).await;
    let token = login["token"].as_str().unwrap();
    let req = common::owned(test::TestRequest::get(), common::id(&opened), token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, opened);
}

#[actix_web::test]
async fn listing_returns_every_account_without_hashes() {
    let app = test::init_service(common::app(Arc::new(Memory::new()))).await;
    for (first, last) in [("A", "B"), ("C", "D")] {
        let req = common::open(first, last, common::PASSWORD).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let req = test::TestRequest::get().uri("/account").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let accounts = body.as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert!(!common::leaks_hash(&body));
}

#[actix_web::test]
async fn empty_listing_is_an_empty_array() {
    let app = test::init_service(common::app(Arc::new(Memory::new()))).await;
    let req = test::TestRequest::get().uri("/account").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn closed_account_is_gone() {
    let memory = Arc::new(Memory::new());
    let app = test::init_service(common::app(memory.clone())).await;
    let req = common::open("A", "B", common::PASSWORD).to_request();
    let resp = test::call_service(&app, req).await;
    let opened: Value = test::read_body_json(resp).await;
    let id = common::id(&opened);
    let req = common::login(common::number(&opened), common::PASSWORD).to_request();
    let resp = test::call_service(&app, req).await;
    let login: Value = test::read_body_json(resp).await;
    let token = login["token"].as_str().unwrap().to_owned();

    let req = common::owned(test::TestRequest::delete(), id, &token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": id }));

    assert!(matches!(memory.by_id(id).await, Err(StoreError::NotFound(_))));
    let req = common::owned(test::TestRequest::get(), id, &token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn malformed_body_is_a_bad_request() {
    let app = test::init_service(common::app(Arc::new(Memory::new()))).await;
    let req = test::TestRequest::post()
        .uri("/account")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"firstName\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["Error"].is_string());
}

#[actix_web::test]
async fn unsupported_verb_on_collection_is_refused() {
    let app = test::init_service(common::app(Arc::new(Memory::new()))).await;
    let req = test::TestRequest::put().uri("/account").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "Error": "invalid method" }));
}
