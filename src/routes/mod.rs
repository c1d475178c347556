use axum::Router;

use crate::app::AppState;

mod ativo;
mod ativo_fixo;
mod cliente;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 健康检查
        .merge(root::router())
        .nest("/clientes", cliente::router())
        .nest("/ativos", ativo::router())
        .merge(ativo_fixo::router())
}
