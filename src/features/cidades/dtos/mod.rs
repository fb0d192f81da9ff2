mod cidade_dto;

pub use cidade_dto::CidadeDto;
