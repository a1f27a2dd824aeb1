//! Mock collaborators and an in-process HTTP harness

use actix_web::http::StatusCode;
use actix_web::{test, web};
use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use std::sync::Arc;
use tenant_webhooks::Config;
use tenant_webhooks::core::imap::ImapValidator;
use tenant_webhooks::core::models::ImapSettings;
use tenant_webhooks::core::webhooks::Dispatcher;
use tenant_webhooks::server::{AppState, create_app};
use tenant_webhooks::storage::Repository;
use tenant_webhooks::utils::error::Result;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

mock! {
    pub Validator {}

    #[async_trait]
    impl ImapValidator for Validator {
        async fn validate(&self, settings: &ImapSettings) -> Result<()>;
    }
}

/// Start a webhook receiver answering `status` and expecting `hits` deliveries
pub async fn receiver(status: u16, hits: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status))
        .expect(hits)
        .mount(&server)
        .await;
    server
}

/// The full application wired to a test repository
pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    /// Build the app with an IMAP validator that accepts everything
    pub fn spawn(repository: Arc<dyn Repository>) -> Self {
        let mut validator = MockValidator::new();
        validator.expect_validate().returning(|_| Ok(()));
        Self::with_validator(repository, validator)
    }

    pub fn with_validator(repository: Arc<dyn Repository>, validator: MockValidator) -> Self {
        let mut config = Config::default();
        config.app.tenancy.trust_identity_headers = true;
        config.app.webhooks.timeout_seconds = 2;
        let dispatcher = Dispatcher::new(config.webhooks()).expect("dispatcher");

        Self {
            state: web::Data::new(AppState::new(
                config,
                repository,
                dispatcher,
                Arc::new(validator),
            )),
        }
    }

    /// Send a request and return the status with the decoded envelope
    pub async fn call(&self, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(create_app(self.state.clone())).await;
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }
}

/// Attach administrator identity headers
pub fn as_admin(req: test::TestRequest) -> test::TestRequest {
    req.insert_header(("x-user-id", "1"))
        .insert_header(("x-user-role", "admin"))
}

/// Attach member identity headers
pub fn as_member(req: test::TestRequest, user_id: i64, tenant_id: i64) -> test::TestRequest {
    req.insert_header(("x-user-id", user_id.to_string()))
        .insert_header(("x-tenant-id", tenant_id.to_string()))
        .insert_header(("x-user-role", "member"))
}
