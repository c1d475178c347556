use diesel::prelude::*;

use crate::schema::clientes;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = clientes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub status: bool,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = clientes)]
pub struct NewCliente {
    pub nome: String,
    pub email: String,
    pub status: bool,
}

/// 更新为整行替换，三个字段都必填
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = clientes)]
pub struct UpdateCliente {
    pub nome: String,
    pub email: String,
    pub status: bool,
}
