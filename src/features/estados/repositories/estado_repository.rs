use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::estados::models::Estado;
use crate::shared::pagination::{Page, PageRequest};

/// Columns accepted by the `sort` query parameter.
const SORTABLE_COLUMNS: &[&str] = &["id", "nome"];

/// Persistence gateway for estados.
pub struct EstadoRepository {
    pool: PgPool,
}

impl EstadoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert when the id is absent, update the matching row otherwise.
    pub async fn save(&self, estado: Estado) -> Result<Estado> {
        match estado.id {
            None => {
                let saved = sqlx::query_as::<_, Estado>(
                    "INSERT INTO estados (nome) VALUES ($1) RETURNING id, nome",
                )
                .bind(&estado.nome)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert estado: {:?}", e);
                    AppError::Database(e)
                })?;

                tracing::info!("Estado created: id={:?}", saved.id);
                Ok(saved)
            }
            Some(id) => sqlx::query_as::<_, Estado>(
                "UPDATE estados SET nome = $2 WHERE id = $1 RETURNING id, nome",
            )
            .bind(id)
            .bind(&estado.nome)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update estado {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Estado {} not found", id))),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Estado>> {
        sqlx::query_as::<_, Estado>("SELECT id, nome FROM estados WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch estado {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    /// One ordered window of estados plus the unfiltered total.
    pub async fn find_all(&self, page: &PageRequest) -> Result<Page<Estado>> {
        let order_by = page.order_by(SORTABLE_COLUMNS)?;

        let items = sqlx::query_as::<_, Estado>(&format!(
            "SELECT id, nome FROM estados ORDER BY {} LIMIT $1 OFFSET $2",
            order_by
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list estados: {:?}", e);
            AppError::Database(e)
        })?;

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM estados")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count estados: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Page { items, total_count })
    }

    /// Returns whether a row was actually removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM estados WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete estado {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
