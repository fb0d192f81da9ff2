use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::cidades::dtos::CidadeDto;
use crate::features::cidades::mappers::CidadeMapper;
use crate::features::cidades::repositories::CidadeRepository;
use crate::shared::headers;
use crate::shared::pagination::PageRequest;

/// State for cidade handlers, wired explicitly in `main`.
#[derive(Clone)]
pub struct CidadeState {
    pub repository: Arc<CidadeRepository>,
    pub mapper: CidadeMapper,
}

/// Create a new cidade
#[utoipa::path(
    post,
    path = "/api/cidades",
    request_body = CidadeDto,
    responses(
        (status = 201, description = "Cidade created", body = CidadeDto),
        (status = 400, description = "A new cidade cannot already have an id")
    ),
    tag = "cidades"
)]
pub async fn create_cidade(
    State(state): State<CidadeState>,
    AppJson(dto): AppJson<CidadeDto>,
) -> Result<Response> {
    tracing::debug!("REST request to save Cidade : {:?}", dto);
    save_new(&state, dto).await
}

async fn save_new(state: &CidadeState, dto: CidadeDto) -> Result<Response> {
    if dto.id.is_some() {
        let headers = headers::create_failure_alert("cidade", "idexists");
        return Ok((StatusCode::BAD_REQUEST, headers).into_response());
    }

    let saved = state.repository.save(state.mapper.to_entity(&dto)).await?;
    let result = state.mapper.to_dto(&saved);
    let id = result
        .id
        .ok_or_else(|| AppError::Internal("cidade persisted without an id".to_string()))?;

    let mut headers = headers::create_entity_creation_alert("cidade", id);
    headers.insert(
        header::LOCATION,
        format!("/api/cidades/{}", id).parse().unwrap(),
    );
    Ok((StatusCode::CREATED, headers, Json(result)).into_response())
}

/// Update an existing cidade
///
/// A body without an id aliases to create, which existing clients rely on.
#[utoipa::path(
    put,
    path = "/api/cidades",
    request_body = CidadeDto,
    responses(
        (status = 200, description = "Cidade updated", body = CidadeDto),
        (status = 404, description = "No cidade with the given id")
    ),
    tag = "cidades"
)]
pub async fn update_cidade(
    State(state): State<CidadeState>,
    AppJson(dto): AppJson<CidadeDto>,
) -> Result<Response> {
    tracing::debug!("REST request to update Cidade : {:?}", dto);
    let Some(id) = dto.id else {
        return save_new(&state, dto).await;
    };

    let saved = state.repository.save(state.mapper.to_entity(&dto)).await?;
    let result = state.mapper.to_dto(&saved);
    let headers = headers::create_entity_update_alert("cidade", id);
    Ok((StatusCode::OK, headers, Json(result)).into_response())
}

/// Get a page of cidades
#[utoipa::path(
    get,
    path = "/api/cidades",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of cidades", body = [CidadeDto]),
        (status = 400, description = "Malformed pagination parameters")
    ),
    tag = "cidades"
)]
pub async fn get_all_cidades(
    State(state): State<CidadeState>,
    Query(page): Query<PageRequest>,
) -> Result<Response> {
    tracing::debug!("REST request to get a page of Cidades");
    let result = state.repository.find_all(&page).await?;
    let headers = headers::pagination_headers(&result, &page, "/api/cidades");
    let dtos = state.mapper.rows_to_dtos(&result.items);
    Ok((StatusCode::OK, headers, Json(dtos)).into_response())
}

/// Get one cidade by id
#[utoipa::path(
    get,
    path = "/api/cidades/{id}",
    params(("id" = i64, Path, description = "Cidade id")),
    responses(
        (status = 200, description = "Cidade found", body = CidadeDto),
        (status = 404, description = "Cidade not found")
    ),
    tag = "cidades"
)]
pub async fn get_cidade(
    State(state): State<CidadeState>,
    Path(id): Path<i64>,
) -> Result<Json<CidadeDto>> {
    tracing::debug!("REST request to get Cidade : {}", id);
    let row = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cidade {} not found", id)))?;
    Ok(Json(state.mapper.row_to_dto(&row)))
}

/// Delete one cidade by id
#[utoipa::path(
    delete,
    path = "/api/cidades/{id}",
    params(("id" = i64, Path, description = "Cidade id")),
    responses(
        (status = 200, description = "Cidade deleted"),
        (status = 404, description = "Cidade not found")
    ),
    tag = "cidades"
)]
pub async fn delete_cidade(
    State(state): State<CidadeState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    tracing::debug!("REST request to delete Cidade : {}", id);
    if !state.repository.delete_by_id(id).await? {
        return Err(AppError::NotFound(format!("Cidade {} not found", id)));
    }

    let headers = headers::create_entity_deletion_alert("cidade", id);
    Ok((StatusCode::OK, headers).into_response())
}
