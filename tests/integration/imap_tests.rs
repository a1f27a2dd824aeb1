//! IMAP settings storage and connectivity checks

use crate::common::{ImapFactory, MockValidator, TenantFactory, TestApp, TestDatabase, as_member};
use crate::{assert_err, assert_ok};
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use serde_json::json;
use tenant_webhooks::GatewayError;
use tenant_webhooks::core::imap::ImapStore;
use tenant_webhooks::core::models::{DEFAULT_IMAP_FOLDER, DEFAULT_IMAP_FREQ};
use tenant_webhooks::core::tenancy::{CallerContext, TenantGuard};

async fn seeded_tenant(db: &TestDatabase) -> i64 {
    let guard = TenantGuard::new(db.repository());
    assert_ok!(guard.register(TenantFactory::create()).await).id
}

#[tokio::test]
async fn test_save_fills_defaults_and_forces_owner() {
    let db = TestDatabase::new().await;
    let tenant_id = seeded_tenant(&db).await;
    let store = ImapStore::new(db.repository());
    let caller = CallerContext::member(11, tenant_id);

    let mut settings = ImapFactory::enabled();
    settings.user_id = 999;
    settings.folder.clear();
    settings.imap_freq = 0;
    let saved = assert_ok!(store.save(&caller, settings).await);

    assert_eq!(saved.user_id, 11);
    assert_eq!(saved.tenant_id, Some(tenant_id));
    assert_eq!(saved.folder, DEFAULT_IMAP_FOLDER);
    assert_eq!(saved.imap_freq, DEFAULT_IMAP_FREQ);

    let fetched = assert_ok!(store.get(&caller).await);
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].host, "imap.example.com");
}

#[tokio::test]
async fn test_resave_replaces_single_record_and_keeps_password() {
    let db = TestDatabase::new().await;
    let tenant_id = seeded_tenant(&db).await;
    let store = ImapStore::new(db.repository());
    let caller = CallerContext::member(11, tenant_id);

    assert_ok!(store.save(&caller, ImapFactory::enabled()).await);

    let mut changed = ImapFactory::enabled();
    changed.host = "mail.example.org".to_string();
    changed.password.clear();
    assert_ok!(store.save(&caller, changed).await);

    let fetched = assert_ok!(store.get(&caller).await);
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].host, "mail.example.org");
    assert_eq!(fetched[0].password, "hunter2");
}

#[tokio::test]
async fn test_enabled_settings_require_connection_fields() {
    let db = TestDatabase::new().await;
    let store = ImapStore::new(db.repository());
    let caller = CallerContext::admin(1);

    let mut settings = ImapFactory::enabled();
    settings.host.clear();
    let err = assert_err!(store.save(&caller, settings).await);
    assert!(matches!(err, GatewayError::Validation(msg) if msg == "No IMAP Host specified"));
    assert!(assert_ok!(store.get(&caller).await).is_empty());
}

#[tokio::test]
async fn test_imap_routes() {
    let db = TestDatabase::new().await;
    let tenant_id = seeded_tenant(&db).await;
    let app = TestApp::spawn(db.repository());

    let (status, body) = app
        .call(as_member(TestRequest::get().uri("/api/imapserver"), 11, tenant_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, body) = app
        .call(
            as_member(TestRequest::post().uri("/api/imapserver"), 11, tenant_id)
                .set_json(ImapFactory::json()),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Successfully saved IMAP settings.");

    let (status, body) = app
        .call(as_member(
            TestRequest::get().uri(&format!("/imap/{tenant_id}")),
            12,
            tenant_id,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["user_id"], 11);

    let (status, _) = app
        .call(as_member(
            TestRequest::get().uri(&format!("/imap/{}", tenant_id + 1)),
            12,
            tenant_id,
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_validate_route_uses_validator_without_saving() {
    let db = TestDatabase::new().await;
    let tenant_id = seeded_tenant(&db).await;

    let mut validator = MockValidator::new();
    validator
        .expect_validate()
        .withf(|settings| settings.host == "imap.example.com" && settings.port == 993)
        .times(1)
        .returning(|_| Err(GatewayError::unreachable("imap.example.com:993: connection refused")));
    let app = TestApp::with_validator(db.repository(), validator);

    let (status, body) = app
        .call(
            as_member(TestRequest::post().uri("/api/imapserver/validate"), 11, tenant_id)
                .set_json(ImapFactory::json()),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("connection refused"));

    let (_, body) = app
        .call(as_member(TestRequest::get().uri("/api/imapserver"), 11, tenant_id))
        .await;
    assert_eq!(body["data"], json!([]));
}
