mod cidade_mapper;

pub use cidade_mapper::CidadeMapper;
