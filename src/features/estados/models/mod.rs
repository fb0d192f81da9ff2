mod estado;

pub use estado::Estado;
