mod pessoa;

pub use pessoa::Pessoa;
