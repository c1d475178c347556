use axum::{routing::get, Json, Router};

use crate::api_models::ativo::AtivoFixo;
use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/ativos-fixos", get(get_ativos_fixos))
}

// 行情参考数据，暂不入库
static ATIVOS_FIXOS: [AtivoFixo; 3] = [
    AtivoFixo {
        id: 1,
        nome: "Tesouro Selic 2029",
        valor: 14_532.87,
    },
    AtivoFixo {
        id: 2,
        nome: "PETR4 - Petrobras PN",
        valor: 38.45,
    },
    AtivoFixo {
        id: 3,
        nome: "CDB Banco Inter 110% CDI",
        valor: 1_000.0,
    },
];

async fn get_ativos_fixos() -> Json<&'static [AtivoFixo]> {
    Json(&ATIVOS_FIXOS[..])
}
