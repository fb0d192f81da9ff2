mod estado_mapper;

pub use estado_mapper::EstadoMapper;
