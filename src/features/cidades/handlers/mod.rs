mod cidade_handler;

pub use cidade_handler::*;
