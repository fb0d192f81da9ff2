pub mod constants;
pub mod headers;
pub mod pagination;
