use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::ativo::{create_ativo_for_cliente, list_ativos_by_cliente};
use crate::handler::cliente::{
    create_cliente, delete_cliente, get_cliente, list_clientes, update_cliente,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clientes).post(create_cliente))
        .route(
            "/:id",
            get(get_cliente).put(update_cliente).delete(delete_cliente),
        )
        .route(
            "/:id/ativos",
            get(list_ativos_by_cliente).post(create_ativo_for_cliente),
        )
}
