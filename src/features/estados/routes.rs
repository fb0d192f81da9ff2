use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::estados::handlers::{self, EstadoState};
use crate::features::estados::mappers::EstadoMapper;
use crate::features::estados::repositories::EstadoRepository;

/// Create routes for the estados feature
pub fn routes(repository: Arc<EstadoRepository>) -> Router {
    let state = EstadoState {
        repository,
        mapper: EstadoMapper,
    };
    Router::new()
        .route(
            "/api/estados",
            post(handlers::create_estado)
                .put(handlers::update_estado)
                .get(handlers::get_all_estados),
        )
        .route(
            "/api/estados/{id}",
            get(handlers::get_estado).delete(handlers::delete_estado),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fake::{Fake, Faker};
    use serde_json::{json, Value};
    use sqlx::PgPool;

    use super::*;
    use crate::shared::pagination::PageRequest;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set for endpoint tests");
        let pool = PgPool::connect(&url).await.expect("connect to database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");
        pool
    }

    async fn test_server(pool: &PgPool) -> (TestServer, Arc<EstadoRepository>) {
        let repository = Arc::new(EstadoRepository::new(pool.clone()));
        let server = TestServer::new(routes(Arc::clone(&repository))).expect("test server");
        (server, repository)
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn create_estado_assigns_a_new_id() {
        let pool = test_pool().await;
        let (server, repository) = test_server(&pool).await;
        let before = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;

        let response = server
            .post("/api/estados")
            .json(&json!({"nome": "AAAAA"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body: Value = response.json();
        let id = body["id"].as_i64().expect("assigned id");
        assert_eq!(body["nome"], "AAAAA");
        assert_eq!(
            response.header("location").to_str().unwrap(),
            format!("/api/estados/{}", id)
        );
        assert_eq!(
            response.header("x-cadastroapp-alert").to_str().unwrap(),
            "cadastroApp.estado.created"
        );

        let after = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn create_with_existing_id_is_rejected_without_a_write() {
        let pool = test_pool().await;
        let (server, repository) = test_server(&pool).await;
        let before = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;

        let response = server
            .post("/api/estados")
            .json(&json!({"id": 1, "nome": "AAAAA"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.header("x-cadastroapp-error").to_str().unwrap(),
            "error.idexists"
        );
        assert_eq!(
            response.header("x-cadastroapp-params").to_str().unwrap(),
            "estado"
        );
        assert!(response.as_bytes().is_empty());

        let after = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;
        assert_eq!(after, before);
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn list_carries_pagination_headers() {
        let pool = test_pool().await;
        let (server, repository) = test_server(&pool).await;

        let nome: String = Faker.fake();
        server.post("/api/estados").json(&json!({"nome": nome})).await;

        let response = server.get("/api/estados?page=0&size=5&sort=id,desc").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let total: i64 = response
            .header("x-total-count")
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        let expected = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;
        assert_eq!(total, expected);
        assert!(response
            .header("link")
            .to_str()
            .unwrap()
            .contains("rel=\"first\""));

        let body: Vec<Value> = response.json();
        assert!(body.len() <= 5);
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn sorting_by_an_unknown_column_is_a_bad_request() {
        let pool = test_pool().await;
        let (server, _) = test_server(&pool).await;

        let response = server.get("/api/estados?sort=capital,asc").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn get_nonexistent_estado_is_a_404_with_empty_body() {
        let pool = test_pool().await;
        let (server, _) = test_server(&pool).await;

        let response = server.get(&format!("/api/estados/{}", i64::MAX)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.as_bytes().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn delete_nonexistent_estado_is_a_404() {
        let pool = test_pool().await;
        let (server, _) = test_server(&pool).await;

        let response = server.delete(&format!("/api/estados/{}", i64::MAX)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
