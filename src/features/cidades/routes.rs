use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::cidades::handlers::{self, CidadeState};
use crate::features::cidades::mappers::CidadeMapper;
use crate::features::cidades::repositories::CidadeRepository;

/// Create routes for the cidades feature
pub fn routes(repository: Arc<CidadeRepository>) -> Router {
    let state = CidadeState {
        repository,
        mapper: CidadeMapper,
    };
    Router::new()
        .route(
            "/api/cidades",
            post(handlers::create_cidade)
                .put(handlers::update_cidade)
                .get(handlers::get_all_cidades),
        )
        .route(
            "/api/cidades/{id}",
            get(handlers::get_cidade).delete(handlers::delete_cidade),
        )
        .with_state(state)
}
