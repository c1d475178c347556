use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::schema::ativos;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = ativos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ativo {
    pub id: i32,
    pub nome: String,
    pub valor: BigDecimal,
    pub cliente_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ativos)]
pub struct NewAtivo {
    pub nome: String,
    pub valor: BigDecimal,
    pub cliente_id: i32,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = ativos)]
pub struct UpdateAtivo {
    pub nome: String,
    pub valor: BigDecimal,
}
