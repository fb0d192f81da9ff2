use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::pessoas::handlers;
use crate::features::pessoas::repositories::PessoaRepository;

/// Create routes for the pessoas feature
pub fn routes(repository: Arc<PessoaRepository>) -> Router {
    Router::new()
        .route(
            "/api/pessoas",
            post(handlers::create_pessoa)
                .put(handlers::update_pessoa)
                .get(handlers::get_all_pessoas),
        )
        .route(
            "/api/pessoas/{id}",
            get(handlers::get_pessoa).delete(handlers::delete_pessoa),
        )
        .with_state(repository)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use sqlx::PgPool;

    use super::*;
    use crate::features::pessoas::models::Pessoa;
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

    async fn test_server(pool: &PgPool) -> (TestServer, Arc<PessoaRepository>) {
        let repository = Arc::new(PessoaRepository::new(pool.clone()));
        let server = TestServer::new(routes(Arc::clone(&repository))).expect("test server");
        (server, repository)
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn create_pessoa_then_list_newest_first() {
        let pool = test_pool().await;
        let (server, repository) = test_server(&pool).await;
        let before = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;

        let created = server
            .post("/api/pessoas")
            .json(&json!({"nome": "AAAAA", "documento": "AAAAA", "idade": 1}))
            .await;
        assert_eq!(created.status_code(), StatusCode::CREATED);
        let body: Pessoa = created.json();
        assert!(body.id.is_some());
        assert_eq!(body.nome.as_deref(), Some("AAAAA"));
        assert_eq!(body.documento.as_deref(), Some("AAAAA"));
        assert_eq!(body.idade, Some(1));

        let after = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;
        assert_eq!(after, before + 1);

        // The new pessoa leads a descending-by-id listing
        let listed = server.get("/api/pessoas?sort=id,desc").await;
        assert_eq!(listed.status_code(), StatusCode::OK);
        let items: Vec<Value> = listed.json();
        assert_eq!(items[0]["id"], json!(body.id));
        assert_eq!(items[0]["idade"], 1);
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn update_pessoa_keeps_the_store_size() {
        let pool = test_pool().await;
        let (server, repository) = test_server(&pool).await;

        let created: Pessoa = server
            .post("/api/pessoas")
            .json(&json!({"nome": "AAAAA", "documento": "AAAAA", "idade": 1}))
            .await
            .json();
        let before = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;

        let updated = server
            .put("/api/pessoas")
            .json(&json!({
                "id": created.id,
                "nome": "BBBBB",
                "documento": "BBBBB",
                "idade": 2
            }))
            .await;
        assert_eq!(updated.status_code(), StatusCode::OK);

        let stored = repository
            .find_by_id(created.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.nome.as_deref(), Some("BBBBB"));
        assert_eq!(stored.idade, Some(2));

        let after = repository
            .find_all(&PageRequest::default())
            .await
            .unwrap()
            .total_count;
        assert_eq!(after, before);
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
    async fn get_nonexistent_pessoa_is_a_404() {
        let pool = test_pool().await;
        let (server, _) = test_server(&pool).await;

        let response = server.get(&format!("/api/pessoas/{}", i64::MAX)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.as_bytes().is_empty());
    }
}
