use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

pub mod ativo;
pub mod cliente;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;
