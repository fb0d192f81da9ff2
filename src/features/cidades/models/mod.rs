mod cidade;

pub use cidade::{Cidade, CidadeRow, EstadoRef};
