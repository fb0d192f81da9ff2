pub mod cidades;
pub mod estados;
pub mod pessoas;
