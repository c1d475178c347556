use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::ativo::{create_ativo, delete_ativo, get_ativo, list_ativos, update_ativo};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ativos).post(create_ativo))
        .route(
            "/:id",
            get(get_ativo).put(update_ativo).delete(delete_ativo),
        )
}
