//! IMAP settings endpoints

use crate::core::models::ImapSettings;
use crate::core::tenancy::{CallerContext, parse_tenant_path};
use crate::server::routes::{ApiResponse, method_not_allowed};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::info;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/imapserver")
            .route(web::get().to(get_settings))
            .route(web::post().to(save_settings))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/imapserver/validate")
            .route(web::post().to(validate_settings))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/imap/{tenant_id}")
            .route(web::get().to(list_tenant_settings))
            .default_service(web::to(method_not_allowed)),
    );
}

async fn get_settings(state: web::Data<AppState>, caller: CallerContext) -> Result<HttpResponse> {
    let settings = state.imap().get(&caller).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("IMAP settings retrieved", settings)))
}

async fn save_settings(
    state: web::Data<AppState>,
    caller: CallerContext,
    body: web::Json<ImapSettings>,
) -> Result<HttpResponse> {
    let saved = state.imap().save(&caller, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Successfully saved IMAP settings.",
        saved,
    )))
}

/// Connectivity check without persisting.
///
/// A failed check is a normal answer here, reported as 200 with
/// `success: false`.
async fn validate_settings(
    state: web::Data<AppState>,
    caller: CallerContext,
    body: web::Json<ImapSettings>,
) -> Result<HttpResponse> {
    let settings = body.into_inner();

    match state.imap_validator.validate(&settings).await {
        Ok(()) => {
            info!(user_id = caller.user_id, host = %settings.host, "IMAP settings validated");
            Ok(HttpResponse::Created().json(ApiResponse::message("Successful login.")))
        }
        Err(e) if e.is_server_fault() => Err(e),
        Err(e) => Ok(HttpResponse::Ok().json(ApiResponse::failure(e.public_message()))),
    }
}

async fn list_tenant_settings(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let tenant_id = parse_tenant_path(&path)?;
    let settings = state.imap().list_for_tenant(&caller, tenant_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("IMAP settings retrieved", settings)))
}
