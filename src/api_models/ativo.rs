use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::decimal;

/// 拒绝超过两位小数的金额，避免入库时被静默舍入
fn validate_valor_scale(valor: f64) -> Result<(), ValidationError> {
    if decimal::fits_valor_scale(valor) {
        Ok(())
    } else {
        let mut err = ValidationError::new("scale");
        err.message = Some("Valor deve ter no máximo duas casas decimais".into());
        Err(err)
    }
}

/// POST /ativos 的请求体，需要显式给出所属客户
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAtivo {
    #[validate(length(min = 1, message = "Nome obrigatório"))]
    pub nome: String,
    #[validate(
        range(exclusive_min = 0.0, message = "Valor deve ser maior que zero"),
        custom(function = "validate_valor_scale")
    )]
    pub valor: f64,
    pub cliente_id: i32,
}

/// POST /clientes/:id/ativos 的请求体，客户 id 取自路径
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClienteAtivo {
    #[validate(length(min = 1, message = "Nome obrigatório"))]
    pub nome: String,
    #[validate(
        range(exclusive_min = 0.0, message = "Valor deve ser maior que zero"),
        custom(function = "validate_valor_scale")
    )]
    pub valor: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAtivoRequest {
    #[validate(length(min = 1, message = "Nome obrigatório"))]
    pub nome: String,
    #[validate(
        range(min = 0.0, message = "Valor não pode ser negativo"),
        custom(function = "validate_valor_scale")
    )]
    pub valor: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtivoResponse {
    pub id: i32,
    pub nome: String,
    pub valor: f64,
    pub cliente_id: i32,
}

/// /ativos-fixos 返回的静态参考数据
#[derive(Debug, Serialize, Clone, Copy)]
pub struct AtivoFixo {
    pub id: i32,
    pub nome: &'static str,
    pub valor: f64,
}
