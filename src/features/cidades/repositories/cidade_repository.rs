use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::cidades::models::{Cidade, CidadeRow, EstadoRef};
use crate::shared::pagination::{Page, PageRequest};

/// Columns accepted by the `sort` query parameter.
const SORTABLE_COLUMNS: &[&str] = &["id", "nome", "estado_id"];

/// Read queries join the estado so rows carry the estado name.
const SELECT_WITH_ESTADO: &str = "SELECT cidade.id, cidade.nome, cidade.estado_id, \
     estado.nome AS estado_nome \
     FROM cidades cidade \
     LEFT JOIN estados estado ON estado.id = cidade.estado_id";

/// Persistence gateway for cidades.
pub struct CidadeRepository {
    pool: PgPool,
}

impl CidadeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert when the id is absent, update the matching row otherwise.
    ///
    /// Returns the persisted entity; the estado stays an id-only reference
    /// here, the joined read model is only produced by the find methods.
    pub async fn save(&self, cidade: Cidade) -> Result<Cidade> {
        let estado_id = cidade.estado.map(|e| e.id);
        let row: (i64, Option<String>, Option<i64>) = match cidade.id {
            None => {
                sqlx::query_as(
                    "INSERT INTO cidades (nome, estado_id) VALUES ($1, $2) \
                     RETURNING id, nome, estado_id",
                )
                .bind(&cidade.nome)
                .bind(estado_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert cidade: {:?}", e);
                    AppError::Database(e)
                })?
            }
            Some(id) => sqlx::query_as(
                "UPDATE cidades SET nome = $2, estado_id = $3 WHERE id = $1 \
                 RETURNING id, nome, estado_id",
            )
            .bind(id)
            .bind(&cidade.nome)
            .bind(estado_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update cidade {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Cidade {} not found", id)))?,
        };

        let (id, nome, estado_id) = row;
        if cidade.id.is_none() {
            tracing::info!("Cidade created: id={}", id);
        }
        Ok(Cidade {
            id: Some(id),
            nome,
            estado: estado_id.map(|id| EstadoRef { id }),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<CidadeRow>> {
        sqlx::query_as::<_, CidadeRow>(&format!("{} WHERE cidade.id = $1", SELECT_WITH_ESTADO))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch cidade {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    /// One ordered window of cidades plus the unfiltered total.
    pub async fn find_all(&self, page: &PageRequest) -> Result<Page<CidadeRow>> {
        let order_by = page.order_by(SORTABLE_COLUMNS)?;

        let items = sqlx::query_as::<_, CidadeRow>(&format!(
            "{} ORDER BY cidade.{} LIMIT $1 OFFSET $2",
            SELECT_WITH_ESTADO, order_by
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cidades: {:?}", e);
            AppError::Database(e)
        })?;

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cidades")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count cidades: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Page { items, total_count })
    }

    /// Returns whether a row was actually removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cidades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete cidade {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
