mod estado_dto;

pub use estado_dto::EstadoDto;
