//! Webhook subscription endpoints

use crate::core::models::WebhookDraft;
use crate::core::models::webhook::validate_url;
use crate::core::tenancy::{CallerContext, TenantScope, parse_tenant_path};
use crate::core::webhooks::{EndPoint, validation};
use crate::server::routes::{ApiResponse, method_not_allowed};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/webhooks")
            .route(web::get().to(list_webhooks))
            .route(web::post().to(create_webhook))
            .default_service(web::to(method_not_allowed)),
    )
    // Registered before `{id}` so it is never read as an id
    .service(
        web::resource("/api/webhooks/validate")
            .route(web::post().to(validate_endpoint))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/webhooks/{id:\\d+}")
            .route(web::get().to(get_webhook))
            .route(web::put().to(update_webhook))
            .route(web::delete().to(delete_webhook))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/webhooks/{id:\\d+}/validate")
            .route(web::post().to(validate_webhook))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/webhooks/{tenant_id}")
            .route(web::get().to(list_tenant_webhooks))
            .default_service(web::to(method_not_allowed)),
    );
}

#[derive(Debug, Default, Deserialize)]
struct CreateQuery {
    /// Run the validation handshake before persisting
    #[serde(default)]
    validate: bool,
}

async fn list_webhooks(state: web::Data<AppState>, caller: CallerContext) -> Result<HttpResponse> {
    let webhooks = state.webhooks().list(&caller).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Webhooks retrieved", webhooks)))
}

async fn list_tenant_webhooks(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let tenant_id = parse_tenant_path(&path)?;
    let webhooks = state.webhooks().list_for_tenant(&caller, tenant_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Webhooks retrieved", webhooks)))
}

async fn create_webhook(
    state: web::Data<AppState>,
    caller: CallerContext,
    query: web::Query<CreateQuery>,
    body: web::Json<WebhookDraft>,
) -> Result<HttpResponse> {
    TenantScope::from_caller(&caller)?;
    let store = state.webhooks();
    let draft = body.into_inner();
    // Rejects unknown owners before any outbound request
    store.check(&caller, &draft).await?;

    if query.validate {
        validation::validate(&state.dispatcher, &draft.endpoint()).await?;
    }

    let webhook = store.create(&caller, draft).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Webhook created", webhook)))
}

async fn validate_endpoint(
    state: web::Data<AppState>,
    caller: CallerContext,
    body: web::Json<EndPoint>,
) -> Result<HttpResponse> {
    TenantScope::from_caller(&caller)?;
    let endpoint = body.into_inner();
    validate_url(&endpoint.url)?;

    validation::validate(&state.dispatcher, &endpoint).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Webhook endpoint validated")))
}

async fn get_webhook(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let webhook = state.webhooks().get(&caller, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Webhook retrieved", webhook)))
}

async fn update_webhook(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<i64>,
    body: web::Json<WebhookDraft>,
) -> Result<HttpResponse> {
    let webhook = state
        .webhooks()
        .update(&caller, path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Webhook updated", webhook)))
}

async fn delete_webhook(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.webhooks().delete(&caller, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Webhook deleted")))
}

async fn validate_webhook(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let store = state.webhooks();
    let webhook =
        validation::validate_stored(&store, &state.dispatcher, &caller, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Webhook validated", webhook)))
}
