mod cidade_repository;

pub use cidade_repository::CidadeRepository;
