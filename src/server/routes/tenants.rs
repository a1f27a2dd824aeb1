//! Tenant management endpoints (administrators only)

use crate::core::models::TenantDraft;
use crate::core::tenancy::{CallerContext, parse_tenant_path};
use crate::server::routes::{ApiResponse, method_not_allowed};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/tenants")
            .route(web::get().to(list_tenants))
            .route(web::post().to(create_tenant))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/tenants/{id}")
            .route(web::get().to(get_tenant))
            .route(web::put().to(update_tenant))
            .route(web::delete().to(delete_tenant))
            .default_service(web::to(method_not_allowed)),
    );
}

async fn list_tenants(state: web::Data<AppState>, caller: CallerContext) -> Result<HttpResponse> {
    caller.require_admin()?;
    let tenants = state.tenants().list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Tenants retrieved", tenants)))
}

async fn create_tenant(
    state: web::Data<AppState>,
    caller: CallerContext,
    body: web::Json<TenantDraft>,
) -> Result<HttpResponse> {
    caller.require_admin()?;
    let tenant = state.tenants().register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Tenant created successfully!", tenant)))
}

async fn get_tenant(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    caller.require_admin()?;
    let id = parse_tenant_path(&path)?;
    let tenant = state.tenants().get(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Tenant retrieved", tenant)))
}

async fn update_tenant(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<String>,
    body: web::Json<TenantDraft>,
) -> Result<HttpResponse> {
    caller.require_admin()?;
    let id = parse_tenant_path(&path)?;
    let tenant = state.tenants().update(id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Tenant updated successfully!", tenant)))
}

async fn delete_tenant(
    state: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    caller.require_admin()?;
    let id = parse_tenant_path(&path)?;
    state.tenants().delete(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Tenant deleted successfully!")))
}
