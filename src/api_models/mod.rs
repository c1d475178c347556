pub mod ativo;
pub mod cliente;

pub use ativo::{AtivoFixo, AtivoResponse, CreateAtivo, CreateClienteAtivo, UpdateAtivoRequest};
pub use cliente::{ClienteRequest, ClienteResponse};
