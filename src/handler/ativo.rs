use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::api_models::ativo::{AtivoResponse, CreateAtivo, CreateClienteAtivo, UpdateAtivoRequest};
use crate::app::AppState;
use crate::handler::error::{store_error, AppError};
use crate::handler::extract::{IdParam, ValidatedJson};
use crate::models::{Ativo, NewAtivo, UpdateAtivo};
use crate::repositories::ativo;
use crate::utils::decimal;

impl TryFrom<Ativo> for AtivoResponse {
    type Error = AppError;

    fn try_from(a: Ativo) -> Result<Self, Self::Error> {
        let valor = decimal::to_f64(&a.valor).ok_or(AppError::InternalServerError)?;
        Ok(Self {
            id: a.id,
            nome: a.nome,
            valor,
            cliente_id: a.cliente_id,
        })
    }
}

fn to_responses(items: Vec<Ativo>) -> Result<Vec<AtivoResponse>, AppError> {
    items.into_iter().map(AtivoResponse::try_from).collect()
}

fn to_new_ativo(nome: String, valor: f64, cliente_id: i32) -> Result<NewAtivo, AppError> {
    let valor = decimal::to_bigdecimal(valor)
        .ok_or_else(|| AppError::BadRequest("Valor inválido".to_string()))?;
    Ok(NewAtivo {
        nome,
        valor,
        cliente_id,
    })
}

pub async fn list_ativos(
    State(state): State<AppState>,
) -> Result<Json<Vec<AtivoResponse>>, AppError> {
    let mut conn = state.conn()?;
    let items = ativo::list_all(&mut conn).map_err(|e| store_error(e, "Erro ao listar ativos"))?;
    Ok(Json(to_responses(items)?))
}

pub async fn get_ativo(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<AtivoResponse>, AppError> {
    let mut conn = state.conn()?;
    let found = ativo::find_by_id(&mut conn, id).map_err(|e| store_error(e, "Ativo não encontrado"))?;
    Ok(Json(found.try_into()?))
}

pub async fn create_ativo(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAtivo>,
) -> Result<(StatusCode, Json<AtivoResponse>), AppError> {
    let new_ativo = to_new_ativo(payload.nome, payload.valor, payload.cliente_id)?;
    let mut conn = state.conn()?;
    let created = ativo::create(&mut conn, &new_ativo).map_err(|e| store_error(e, "Erro ao criar ativo"))?;
    Ok((StatusCode::CREATED, Json(created.try_into()?)))
}

/// 列出某个客户的资产，客户不存在或没有资产时返回空数组
pub async fn list_ativos_by_cliente(
    State(state): State<AppState>,
    IdParam(cliente_id): IdParam,
) -> Result<Json<Vec<AtivoResponse>>, AppError> {
    let mut conn = state.conn()?;
    let items = ativo::list_by_cliente(&mut conn, cliente_id)
        .map_err(|e| store_error(e, "Erro ao listar ativos do cliente"))?;
    Ok(Json(to_responses(items)?))
}

/// 在客户下创建资产，clienteId 以路径为准
pub async fn create_ativo_for_cliente(
    State(state): State<AppState>,
    IdParam(cliente_id): IdParam,
    ValidatedJson(payload): ValidatedJson<CreateClienteAtivo>,
) -> Result<(StatusCode, Json<AtivoResponse>), AppError> {
    let new_ativo = to_new_ativo(payload.nome, payload.valor, cliente_id)?;
    let mut conn = state.conn()?;
    let created = ativo::create(&mut conn, &new_ativo).map_err(|e| store_error(e, "Erro ao criar ativo"))?;
    Ok((StatusCode::CREATED, Json(created.try_into()?)))
}

pub async fn update_ativo(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidatedJson(payload): ValidatedJson<UpdateAtivoRequest>,
) -> Result<Json<AtivoResponse>, AppError> {
    let valor = decimal::to_bigdecimal(payload.valor)
        .ok_or_else(|| AppError::BadRequest("Valor inválido".to_string()))?;
    let update_data = UpdateAtivo {
        nome: payload.nome,
        valor,
    };
    let mut conn = state.conn()?;
    let updated = ativo::update_by_id(&mut conn, id, &update_data)
        .map_err(|e| store_error(e, "Erro ao atualizar ativo"))?;
    Ok(Json(updated.try_into()?))
}

pub async fn delete_ativo(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Value>, AppError> {
    const FAILURE: &str = "Erro ao deletar ativo";

    let mut conn = state.conn()?;
    let affected = ativo::delete_by_id(&mut conn, id).map_err(|e| store_error(e, FAILURE))?;
    if affected == 0 {
        return Err(store_error(diesel::result::Error::NotFound, FAILURE));
    }
    Ok(Json(json!({"message": "Ativo deletado com sucesso"})))
}
