use diesel::prelude::*;

use crate::models::{Ativo, NewAtivo, UpdateAtivo};
use crate::repositories::PgPoolConn;
use crate::schema::ativos::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_ativo: &NewAtivo) -> Result<Ativo, diesel::result::Error> {
    diesel::insert_into(ativos)
        .values(new_ativo)
        .returning(Ativo::as_returning())
        .get_result(conn)
}

pub fn find_by_id(conn: &mut PgPoolConn, ativo_id: i32) -> Result<Ativo, diesel::result::Error> {
    ativos.find(ativo_id).select(Ativo::as_select()).first(conn)
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<Ativo>, diesel::result::Error> {
    ativos.order(id.asc()).select(Ativo::as_select()).load(conn)
}

/// 按客户过滤，客户不存在时返回空列表
pub fn list_by_cliente(conn: &mut PgPoolConn, owner_id: i32) -> Result<Vec<Ativo>, diesel::result::Error> {
    ativos
        .filter(cliente_id.eq(owner_id))
        .order(id.asc())
        .select(Ativo::as_select())
        .load(conn)
}

pub fn update_by_id(
    conn: &mut PgPoolConn,
    ativo_id: i32,
    update_data: &UpdateAtivo,
) -> Result<Ativo, diesel::result::Error> {
    diesel::update(ativos.find(ativo_id))
        .set(update_data)
        .returning(Ativo::as_returning())
        .get_result(conn)
}

pub fn delete_by_id(conn: &mut PgPoolConn, ativo_id: i32) -> Result<usize, diesel::result::Error> {
    diesel::delete(ativos.find(ativo_id)).execute(conn)
}
