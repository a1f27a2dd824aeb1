//! Tenant registration and lifecycle

use crate::common::{TenantFactory, TestApp, TestDatabase, WebhookFactory, as_admin, as_member};
use crate::{assert_err, assert_ok};
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use serde_json::json;
use tenant_webhooks::GatewayError;
use tenant_webhooks::core::tenancy::{CallerContext, TenantGuard};
use tenant_webhooks::core::webhooks::SubscriptionStore;

#[tokio::test]
async fn test_register_and_fetch_tenant() {
    let db = TestDatabase::new().await;
    let guard = TenantGuard::new(db.repository());

    let tenant = assert_ok!(guard.register(TenantFactory::with_identifier("acme")).await);
    assert!(tenant.id > 0);
    assert_eq!(assert_ok!(guard.get(tenant.id).await), tenant);
    assert_eq!(assert_ok!(guard.list().await), vec![tenant]);
}

#[tokio::test]
async fn test_duplicate_identifier_rejected_by_guard() {
    let db = TestDatabase::new().await;
    let guard = TenantGuard::new(db.repository());

    assert_ok!(guard.register(TenantFactory::with_identifier("acme")).await);
    let err = assert_err!(guard.register(TenantFactory::with_identifier("acme")).await);
    assert!(matches!(err, GatewayError::Conflict(msg) if msg == "Tenant identifier already in use"));
}

#[tokio::test]
async fn test_identifier_swap_is_rejected() {
    let db = TestDatabase::new().await;
    let guard = TenantGuard::new(db.repository());
    let acme = assert_ok!(guard.register(TenantFactory::with_identifier("acme")).await);
    assert_ok!(guard.register(TenantFactory::with_identifier("globex")).await);

    let err = assert_err!(
        guard
            .update(acme.id, TenantFactory::with_identifier("globex"))
            .await
    );
    assert!(matches!(err, GatewayError::Conflict(_)));
    assert_eq!(assert_ok!(guard.get(acme.id).await).tenant_identifier, "acme");
}

#[tokio::test]
async fn test_tenant_crud_over_http() {
    let db = TestDatabase::new().await;
    let app = TestApp::spawn(db.repository());

    let (status, body) = app
        .call(as_admin(TestRequest::post().uri("/api/tenants")).set_json(TenantFactory::json("acme")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().unwrap();
    let guid = body["data"]["guid"].as_str().unwrap().to_string();

    let (status, body) = app
        .call(
            as_admin(TestRequest::put().uri(&format!("/api/tenants/{id}"))).set_json(json!({
                "id": id,
                "tenant_name": "Acme Corporation",
                "tenant_identifier": "acme"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tenant_name"], "Acme Corporation");
    assert_eq!(body["data"]["guid"], guid);

    let (status, body) = app.call(as_admin(TestRequest::get().uri("/api/tenants"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = app
        .call(as_admin(TestRequest::delete().uri(&format!("/api/tenants/{id}"))))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .call(as_admin(TestRequest::delete().uri(&format!("/api/tenants/{id}"))))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_invalid_tenant_body() {
    let db = TestDatabase::new().await;
    let app = TestApp::spawn(db.repository());

    let (status, body) = app
        .call(
            as_admin(TestRequest::post().uri("/api/tenants"))
                .set_json(json!({"tenant_name": "", "tenant_identifier": "acme"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Tenant name not specified");

    let (status, _) = app
        .call(as_admin(TestRequest::post().uri("/api/tenants")).set_json(json!({
            "tenant_name": "x".repeat(101),
            "tenant_identifier": "acme"
        })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_members_cannot_manage_tenants() {
    let db = TestDatabase::new().await;
    let app = TestApp::spawn(db.repository());

    let (status, _) = app
        .call(
            as_member(TestRequest::post().uri("/api/tenants"), 2, 1)
                .set_json(TenantFactory::json("acme")),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_deleting_tenant_orphans_its_webhooks() {
    let db = TestDatabase::new().await;
    let guard = TenantGuard::new(db.repository());
    let store = SubscriptionStore::new(db.repository(), false);

    let tenant = assert_ok!(guard.register(TenantFactory::create()).await);
    let webhook = assert_ok!(
        store
            .create(
                &CallerContext::member(7, tenant.id),
                WebhookFactory::create("https://acme.example/hook"),
            )
            .await
    );

    assert_ok!(guard.delete(tenant.id).await);

    let admin = CallerContext::admin(1);
    let orphan = assert_ok!(store.get(&admin, webhook.id).await);
    assert_eq!(orphan.tenant_id, None);
    assert!(!orphan.is_active);
    assert!(assert_ok!(store.list_for_tenant(&admin, tenant.id).await).is_empty());
}
