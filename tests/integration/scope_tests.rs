//! Cross-tenant isolation and concurrent registration

use crate::assert_ok;
use crate::common::{ImapFactory, TenantFactory, TestApp, TestDatabase, WebhookFactory, as_admin, as_member};
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use futures::future::join_all;
use tenant_webhooks::GatewayError;
use tenant_webhooks::core::tenancy::TenantGuard;

async fn two_tenants(db: &TestDatabase) -> (i64, i64) {
    let guard = TenantGuard::new(db.repository());
    let acme = assert_ok!(guard.register(TenantFactory::with_identifier("acme")).await);
    let globex = assert_ok!(guard.register(TenantFactory::with_identifier("globex")).await);
    (acme.id, globex.id)
}

#[tokio::test]
async fn test_member_cannot_reach_other_tenant_webhooks() {
    let db = TestDatabase::new().await;
    let (acme, globex) = two_tenants(&db).await;
    let app = TestApp::spawn(db.repository());

    let (_, body) = app
        .call(
            as_member(TestRequest::post().uri("/api/webhooks"), 5, acme)
                .set_json(WebhookFactory::json("https://acme.example/hook")),
        )
        .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .call(as_member(TestRequest::get().uri("/api/webhooks"), 6, globex))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    for req in [
        TestRequest::get().uri(&format!("/api/webhooks/{id}")),
        TestRequest::delete().uri(&format!("/api/webhooks/{id}")),
        TestRequest::post().uri(&format!("/api/webhooks/{id}/validate")),
        TestRequest::put()
            .uri(&format!("/api/webhooks/{id}"))
            .set_json(WebhookFactory::json("https://evil.example/hook")),
    ] {
        let (status, _) = app.call(as_member(req, 6, globex)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = app
        .call(as_member(TestRequest::get().uri(&format!("/webhooks/{acme}")), 6, globex))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The record is untouched and still visible to its owner and admins
    let (status, body) = app
        .call(as_member(TestRequest::get().uri(&format!("/api/webhooks/{id}")), 5, acme))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["url"], "https://acme.example/hook");
    let (_, body) = app.call(as_admin(TestRequest::get().uri("/api/webhooks"))).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_member_cannot_move_webhook_to_other_tenant() {
    let db = TestDatabase::new().await;
    let (acme, globex) = two_tenants(&db).await;
    let app = TestApp::spawn(db.repository());

    let mut payload = WebhookFactory::json("https://acme.example/hook");
    payload["tenant_id"] = globex.into();
    let (status, body) = app
        .call(as_member(TestRequest::post().uri("/api/webhooks"), 5, acme).set_json(payload))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["tenant_id"], acme);
}

#[tokio::test]
async fn test_missing_identity_and_membership() {
    let db = TestDatabase::new().await;
    let app = TestApp::spawn(db.repository());

    let (status, _) = app.call(TestRequest::get().uri("/api/webhooks")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .call(
            TestRequest::get()
                .uri("/api/webhooks")
                .insert_header(("x-user-id", "3")),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Caller is not a member of any tenant");
}

#[tokio::test]
async fn test_concurrent_registration_of_same_identifier() {
    let db = TestDatabase::new().await;
    let guard = TenantGuard::new(db.repository());

    let attempts = (0..8).map(|_| guard.register(TenantFactory::with_identifier("racy")));
    let results = join_all(attempts).await;

    let created = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(created, 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, GatewayError::Conflict(_)))
    );
    assert_eq!(assert_ok!(guard.list().await).len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_stay_in_their_tenant() {
    let db = TestDatabase::new().await;
    let (acme, globex) = two_tenants(&db).await;
    let app = TestApp::spawn(db.repository());

    // Interleave the two tenants; acme users are 100.., globex users 200..
    let owners: Vec<(i64, i64)> = (0..6)
        .map(|i| if i % 2 == 0 { (100 + i, acme) } else { (200 + i, globex) })
        .collect();

    let webhook_creates = owners.iter().map(|&(user_id, tenant_id)| {
        app.call(
            as_member(TestRequest::post().uri("/api/webhooks"), user_id, tenant_id)
                .set_json(WebhookFactory::json(&format!("https://t{tenant_id}.example/{user_id}"))),
        )
    });
    let imap_saves = owners.iter().map(|&(user_id, tenant_id)| {
        app.call(
            as_member(TestRequest::post().uri("/api/imapserver"), user_id, tenant_id)
                .set_json(ImapFactory::json()),
        )
    });
    let (webhooks, imaps) = futures::join!(join_all(webhook_creates), join_all(imap_saves));
    assert!(webhooks.iter().all(|(status, _)| *status == StatusCode::CREATED));
    assert!(imaps.iter().all(|(status, _)| *status == StatusCode::CREATED));

    for (user_id, tenant_id) in [(100, acme), (201, globex)] {
        let (status, body) = app
            .call(as_member(TestRequest::get().uri("/api/webhooks"), user_id, tenant_id))
            .await;
        assert_eq!(status, StatusCode::OK);
        let listed = body["data"].as_array().unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|w| w["tenant_id"] == tenant_id));

        let (status, body) = app
            .call(as_member(
                TestRequest::get().uri(&format!("/imap/{tenant_id}")),
                user_id,
                tenant_id,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        let listed = body["data"].as_array().unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|s| s["tenant_id"] == tenant_id));
    }
}
