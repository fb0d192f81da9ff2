mod estado_repository;

pub use estado_repository::EstadoRepository;
