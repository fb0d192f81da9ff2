mod estado_handler;

pub use estado_handler::*;
