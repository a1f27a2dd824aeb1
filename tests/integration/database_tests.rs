//! SeaORM backend behavior

use crate::common::{ImapFactory, TestDatabase};
use crate::{assert_err, assert_ok};
use tenant_webhooks::GatewayError;
use tenant_webhooks::core::tenancy::TenantScope;
use tenant_webhooks::storage::{NewTenant, NewWebhook, Repository, StorageHealthStatus};

fn new_tenant(identifier: &str) -> NewTenant {
    NewTenant {
        guid: uuid::Uuid::new_v4().to_string(),
        tenant_name: identifier.to_uppercase(),
        tenant_identifier: identifier.to_string(),
    }
}

fn new_webhook(tenant_id: Option<i64>, url: &str, is_active: bool) -> NewWebhook {
    NewWebhook {
        tenant_id,
        name: "hook".to_string(),
        url: url.to_string(),
        secret: "s3cret".to_string(),
        is_active,
    }
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = TestDatabase::new().await;
    assert_ok!(db.db().migrate().await);
    assert_ok!(db.db().health_check().await);
    assert_eq!(db.db().backend(), "sqlite");
}

#[tokio::test]
async fn test_health_probe() {
    let db = TestDatabase::new().await;
    let status = StorageHealthStatus::probe(db.repository().as_ref()).await;
    assert!(status.overall);
    assert!(status.error.is_none());
}

#[tokio::test]
async fn test_unique_identifier_enforced_by_storage() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    assert_ok!(repo.insert_tenant(new_tenant("acme")).await);
    let err = assert_err!(repo.insert_tenant(new_tenant("acme")).await);
    assert!(matches!(err, GatewayError::Conflict(_)));
}

#[tokio::test]
async fn test_webhook_requires_existing_tenant() {
    let db = TestDatabase::new().await;
    let err = assert_err!(
        db.repository()
            .insert_webhook(new_webhook(Some(77), "https://x.example/", true))
            .await
    );
    assert!(matches!(err, GatewayError::Validation(_)));
}

#[tokio::test]
async fn test_out_of_range_ids_match_nothing() {
    let db = TestDatabase::new().await;
    let repo = db.repository();
    let huge = i64::from(i32::MAX) + 1;

    assert!(assert_ok!(repo.find_tenant(huge).await).is_none());
    assert!(assert_ok!(repo.find_webhook(huge, &TenantScope::All).await).is_none());
    assert!(!assert_ok!(repo.delete_tenant(huge).await));
    assert!(assert_ok!(repo.list_webhooks(&TenantScope::Tenant(huge)).await).is_empty());
}

#[tokio::test]
async fn test_active_webhooks_include_globals() {
    let db = TestDatabase::new().await;
    let repo = db.repository();
    let acme = assert_ok!(repo.insert_tenant(new_tenant("acme")).await).id;
    let globex = assert_ok!(repo.insert_tenant(new_tenant("globex")).await).id;

    assert_ok!(repo.insert_webhook(new_webhook(Some(acme), "https://a.example/", true)).await);
    assert_ok!(repo.insert_webhook(new_webhook(Some(acme), "https://b.example/", false)).await);
    assert_ok!(repo.insert_webhook(new_webhook(Some(globex), "https://c.example/", true)).await);
    assert_ok!(repo.insert_webhook(new_webhook(None, "https://d.example/", true)).await);

    let active = assert_ok!(repo.list_active_webhooks(Some(acme)).await);
    let mut urls: Vec<_> = active.iter().map(|w| w.url.as_str()).collect();
    urls.sort_unstable();
    assert_eq!(urls, ["https://a.example/", "https://d.example/"]);

    let scoped = assert_ok!(repo.list_webhooks(&TenantScope::Tenant(acme)).await);
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|w| w.tenant_id == Some(acme)));
}

#[tokio::test]
async fn test_imap_upsert_keeps_one_row_per_user() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let mut settings = ImapFactory::enabled();
    settings.user_id = 3;
    assert_ok!(repo.upsert_imap_settings(&settings).await);

    settings.host = "mail.example.org".to_string();
    settings.port = 143;
    assert_ok!(repo.upsert_imap_settings(&settings).await);

    let all = assert_ok!(repo.list_imap_settings(&TenantScope::All).await);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].host, "mail.example.org");
    assert_eq!(all[0].port, 143);
}

#[tokio::test]
async fn test_tenant_delete_orphans_imap_settings() {
    let db = TestDatabase::new().await;
    let repo = db.repository();
    let acme = assert_ok!(repo.insert_tenant(new_tenant("acme")).await).id;

    let mut settings = ImapFactory::enabled();
    settings.user_id = 3;
    settings.tenant_id = Some(acme);
    assert_ok!(repo.upsert_imap_settings(&settings).await);

    assert!(assert_ok!(repo.delete_tenant(acme).await));
    let stored = assert_ok!(repo.find_imap_settings(3).await).unwrap();
    assert_eq!(stored.tenant_id, None);
}
