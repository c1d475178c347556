pub mod ativos;
pub mod clientes;

pub use ativos::{Ativo, NewAtivo, UpdateAtivo};
pub use clientes::{Cliente, NewCliente, UpdateCliente};
