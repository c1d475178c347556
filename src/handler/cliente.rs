use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::api_models::cliente::{ClienteRequest, ClienteResponse};
use crate::app::AppState;
use crate::handler::error::{store_error, AppError};
use crate::handler::extract::{IdParam, ValidatedJson};
use crate::models::{Cliente, NewCliente, UpdateCliente};
use crate::repositories::cliente;

impl From<Cliente> for ClienteResponse {
    fn from(c: Cliente) -> Self {
        Self {
            id: c.id,
            nome: c.nome,
            email: c.email,
            status: c.status,
        }
    }
}

pub async fn list_clientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClienteResponse>>, AppError> {
    let mut conn = state.conn()?;
    let items = cliente::list_all(&mut conn).map_err(|e| store_error(e, "Erro ao listar clientes"))?;
    let response: Vec<ClienteResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

pub async fn get_cliente(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<ClienteResponse>, AppError> {
    let mut conn = state.conn()?;
    let found = cliente::find_by_id(&mut conn, id).map_err(|e| store_error(e, "Cliente não encontrado"))?;
    Ok(Json(found.into()))
}

pub async fn create_cliente(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ClienteRequest>,
) -> Result<(StatusCode, Json<ClienteResponse>), AppError> {
    let mut conn = state.conn()?;
    let new_cliente = NewCliente {
        nome: payload.nome,
        email: payload.email,
        status: payload.status,
    };
    let created = cliente::create(&mut conn, &new_cliente).map_err(|e| store_error(e, "Erro ao criar cliente"))?;
    tracing::info!(cliente_id = created.id, "cliente criado");
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_cliente(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ValidatedJson(payload): ValidatedJson<ClienteRequest>,
) -> Result<Json<ClienteResponse>, AppError> {
    let mut conn = state.conn()?;
    let update_data = UpdateCliente {
        nome: payload.nome,
        email: payload.email,
        status: payload.status,
    };
    let updated = cliente::update_by_id(&mut conn, id, &update_data)
        .map_err(|e| store_error(e, "Erro ao atualizar cliente"))?;
    Ok(Json(updated.into()))
}

pub async fn delete_cliente(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Value>, AppError> {
    const FAILURE: &str = "Erro ao deletar cliente";

    let mut conn = state.conn()?;
    let affected = cliente::delete_by_id(&mut conn, id).map_err(|e| store_error(e, FAILURE))?;
    if affected == 0 {
        return Err(store_error(diesel::result::Error::NotFound, FAILURE));
    }
    Ok(Json(json!({"message": "Cliente deletado com sucesso"})))
}
