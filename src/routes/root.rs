use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}

#[derive(Serialize)]
struct PingResponse {
    message: &'static str,
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "Servidor está funcionando!",
    })
}
