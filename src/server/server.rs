//! HTTP server core implementation

use crate::config::{Config, CorsOrigins, ServerConfig};
use crate::server::builder::ServerBuilder;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the configured collaborators
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");
        ServerBuilder::new().with_config(config.clone()).build().await
    }

    pub fn from_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| {
                GatewayError::Config(format!("Failed to bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Methods served under `/api`
const CORS_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];

fn build_cors(config: &ServerConfig) -> Cors {
    let cors_config = &config.cors;
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = match cors_config.resolve() {
        Ok(CorsOrigins::Listed(origins)) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
        Ok(CorsOrigins::Any) => {
            warn!("CORS admits any origin");
            Cors::default().allow_any_origin()
        }
        Err(e) => {
            // Config::validate rejects this before startup
            warn!(error = %e, "CORS disabled");
            return Cors::default();
        }
    };

    cors = cors
        .allowed_methods(CORS_METHODS)
        .allow_any_header()
        .max_age(cors_config.max_age as usize);
    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = build_cors(state.config.server());
    let max_body_size = state.config.server().max_body_size;

    App::new()
        .app_data(state)
        .app_data(routes::json_config(max_body_size))
        .app_data(routes::query_config())
        .app_data(routes::path_config())
        .wrap(cors)
        .wrap(TracingLogger::default())
        .wrap(RequestIdMiddleware)
        .wrap(DefaultHeaders::new().add(("Server", "tenant-webhooks")))
        .configure(routes::configure_routes)
        .default_service(web::to(routes::not_found))
}
