use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::handler::error::AppError;
use crate::repositories::PgPoolConn;
use crate::routes;
use crate::utils::config::ServerConfig;
use crate::utils::middleware;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
}

impl AppState {
    /// 每个请求独立取一个连接，拿不到连接时返回 500
    pub fn conn(&self) -> Result<PgPoolConn, AppError> {
        self.db_pool.get().map_err(|e| {
            tracing::error!("Failed to get DB connection: {}", e);
            AppError::InternalServerError
        })
    }
}

pub fn build_pool(cfg: &ServerConfig) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(&cfg.database_url);
    let pool = Pool::builder().max_size(cfg.pool_max_size).build(manager)?;
    Ok(pool)
}

pub fn build_app(cfg: &ServerConfig) -> anyhow::Result<Router> {
    let db_pool = build_pool(cfg)?;
    Ok(build_app_with_pool(db_pool, &cfg.allowed_origins))
}

pub fn build_app_with_pool(db_pool: DbPool, allowed_origins: &[String]) -> Router {
    let state = AppState { db_pool };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer(allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
