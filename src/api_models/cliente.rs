use serde::{Deserialize, Serialize};
use validator::Validate;

/// 新建与更新共用同一结构，所有字段必填
#[derive(Debug, Deserialize, Validate)]
pub struct ClienteRequest {
    #[validate(length(min = 1, message = "Nome obrigatório"))]
    pub nome: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    pub status: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ClienteResponse {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub status: bool,
}
