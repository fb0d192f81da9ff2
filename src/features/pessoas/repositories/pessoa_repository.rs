use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::pessoas::models::Pessoa;
use crate::shared::pagination::{Page, PageRequest};

/// Columns accepted by the `sort` query parameter.
const SORTABLE_COLUMNS: &[&str] = &["id", "nome", "documento", "idade"];

const COLUMNS: &str = "id, nome, documento, idade";

/// Persistence gateway for pessoas.
pub struct PessoaRepository {
    pool: PgPool,
}

impl PessoaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert when the id is absent, update the matching row otherwise.
    pub async fn save(&self, pessoa: Pessoa) -> Result<Pessoa> {
        match pessoa.id {
            None => {
                let saved = sqlx::query_as::<_, Pessoa>(&format!(
                    "INSERT INTO pessoas (nome, documento, idade) VALUES ($1, $2, $3) \
                     RETURNING {}",
                    COLUMNS
                ))
                .bind(&pessoa.nome)
                .bind(&pessoa.documento)
                .bind(pessoa.idade)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert pessoa: {:?}", e);
                    AppError::Database(e)
                })?;

                tracing::info!("Pessoa created: id={:?}", saved.id);
                Ok(saved)
            }
            Some(id) => sqlx::query_as::<_, Pessoa>(&format!(
                "UPDATE pessoas SET nome = $2, documento = $3, idade = $4 WHERE id = $1 \
                 RETURNING {}",
                COLUMNS
            ))
            .bind(id)
            .bind(&pessoa.nome)
            .bind(&pessoa.documento)
            .bind(pessoa.idade)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update pessoa {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Pessoa {} not found", id))),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Pessoa>> {
        sqlx::query_as::<_, Pessoa>(&format!(
            "SELECT {} FROM pessoas WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch pessoa {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    /// One ordered window of pessoas plus the unfiltered total.
    pub async fn find_all(&self, page: &PageRequest) -> Result<Page<Pessoa>> {
        let order_by = page.order_by(SORTABLE_COLUMNS)?;

        let items = sqlx::query_as::<_, Pessoa>(&format!(
            "SELECT {} FROM pessoas ORDER BY {} LIMIT $1 OFFSET $2",
            COLUMNS, order_by
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list pessoas: {:?}", e);
            AppError::Database(e)
        })?;

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pessoas")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count pessoas: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Page { items, total_count })
    }

    /// Returns whether a row was actually removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM pessoas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete pessoa {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
