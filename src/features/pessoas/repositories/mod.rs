mod pessoa_repository;

pub use pessoa_repository::PessoaRepository;
