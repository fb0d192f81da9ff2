mod pessoa_handler;

pub use pessoa_handler::*;
