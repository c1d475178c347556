pub mod ativo;
pub mod cliente;
pub mod error;
pub mod extract;
