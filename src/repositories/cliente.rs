use diesel::prelude::*;

use crate::models::{Cliente, NewCliente, UpdateCliente};
use crate::repositories::PgPoolConn;
use crate::schema::clientes::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_cliente: &NewCliente) -> Result<Cliente, diesel::result::Error> {
    diesel::insert_into(clientes)
        .values(new_cliente)
        .returning(Cliente::as_returning())
        .get_result(conn)
}

pub fn find_by_id(conn: &mut PgPoolConn, cliente_id: i32) -> Result<Cliente, diesel::result::Error> {
    clientes.find(cliente_id).select(Cliente::as_select()).first(conn)
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<Cliente>, diesel::result::Error> {
    clientes.order(id.asc()).select(Cliente::as_select()).load(conn)
}

pub fn update_by_id(
    conn: &mut PgPoolConn,
    cliente_id: i32,
    update_data: &UpdateCliente,
) -> Result<Cliente, diesel::result::Error> {
    diesel::update(clientes.find(cliente_id))
        .set(update_data)
        .returning(Cliente::as_returning())
        .get_result(conn)
}

/// 外键为 RESTRICT，名下仍有资产时删除会失败
pub fn delete_by_id(conn: &mut PgPoolConn, cliente_id: i32) -> Result<usize, diesel::result::Error> {
    diesel::delete(clientes.find(cliente_id)).execute(conn)
}
