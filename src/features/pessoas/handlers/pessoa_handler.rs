use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::pessoas::models::Pessoa;
use crate::features::pessoas::repositories::PessoaRepository;
use crate::shared::headers;
use crate::shared::pagination::PageRequest;

/// Create a new pessoa
#[utoipa::path(
    post,
    path = "/api/pessoas",
    request_body = Pessoa,
    responses(
        (status = 201, description = "Pessoa created", body = Pessoa),
        (status = 400, description = "A new pessoa cannot already have an id")
    ),
    tag = "pessoas"
)]
pub async fn create_pessoa(
    State(repository): State<Arc<PessoaRepository>>,
    AppJson(pessoa): AppJson<Pessoa>,
) -> Result<Response> {
    tracing::debug!("REST request to save Pessoa : {:?}", pessoa);
    save_new(&repository, pessoa).await
}

async fn save_new(repository: &PessoaRepository, pessoa: Pessoa) -> Result<Response> {
    if pessoa.id.is_some() {
        let headers = headers::create_failure_alert("pessoa", "idexists");
        return Ok((StatusCode::BAD_REQUEST, headers).into_response());
    }

    let result = repository.save(pessoa).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::Internal("pessoa persisted without an id".to_string()))?;

    let mut headers = headers::create_entity_creation_alert("pessoa", id);
    headers.insert(
        header::LOCATION,
        format!("/api/pessoas/{}", id).parse().unwrap(),
    );
    Ok((StatusCode::CREATED, headers, Json(result)).into_response())
}

/// Update an existing pessoa
///
/// A body without an id aliases to create, which existing clients rely on.
#[utoipa::path(
    put,
    path = "/api/pessoas",
    request_body = Pessoa,
    responses(
        (status = 200, description = "Pessoa updated", body = Pessoa),
        (status = 404, description = "No pessoa with the given id")
    ),
    tag = "pessoas"
)]
pub async fn update_pessoa(
    State(repository): State<Arc<PessoaRepository>>,
    AppJson(pessoa): AppJson<Pessoa>,
) -> Result<Response> {
    tracing::debug!("REST request to update Pessoa : {:?}", pessoa);
    let Some(id) = pessoa.id else {
        return save_new(&repository, pessoa).await;
    };

    let result = repository.save(pessoa).await?;
    let headers = headers::create_entity_update_alert("pessoa", id);
    Ok((StatusCode::OK, headers, Json(result)).into_response())
}

/// Get a page of pessoas
#[utoipa::path(
    get,
    path = "/api/pessoas",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of pessoas", body = [Pessoa]),
        (status = 400, description = "Malformed pagination parameters")
    ),
    tag = "pessoas"
)]
pub async fn get_all_pessoas(
    State(repository): State<Arc<PessoaRepository>>,
    Query(page): Query<PageRequest>,
) -> Result<Response> {
    tracing::debug!("REST request to get a page of Pessoas");
    let result = repository.find_all(&page).await?;
    let headers = headers::pagination_headers(&result, &page, "/api/pessoas");
    Ok((StatusCode::OK, headers, Json(result.items)).into_response())
}

/// Get one pessoa by id
#[utoipa::path(
    get,
    path = "/api/pessoas/{id}",
    params(("id" = i64, Path, description = "Pessoa id")),
    responses(
        (status = 200, description = "Pessoa found", body = Pessoa),
        (status = 404, description = "Pessoa not found")
    ),
    tag = "pessoas"
)]
pub async fn get_pessoa(
    State(repository): State<Arc<PessoaRepository>>,
    Path(id): Path<i64>,
) -> Result<Json<Pessoa>> {
    tracing::debug!("REST request to get Pessoa : {}", id);
    let pessoa = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pessoa {} not found", id)))?;
    Ok(Json(pessoa))
}

/// Delete one pessoa by id
#[utoipa::path(
    delete,
    path = "/api/pessoas/{id}",
    params(("id" = i64, Path, description = "Pessoa id")),
    responses(
        (status = 200, description = "Pessoa deleted"),
        (status = 404, description = "Pessoa not found")
    ),
    tag = "pessoas"
)]
pub async fn delete_pessoa(
    State(repository): State<Arc<PessoaRepository>>,
    Path(id): Path<i64>,
) -> Result<Response> {
    tracing::debug!("REST request to delete Pessoa : {}", id);
    if !repository.delete_by_id(id).await? {
        return Err(AppError::NotFound(format!("Pessoa {} not found", id)));
    }

    let headers = headers::create_entity_deletion_alert("pessoa", id);
    Ok((StatusCode::OK, headers).into_response())
}
