use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::estados::dtos::EstadoDto;
use crate::features::estados::mappers::EstadoMapper;
use crate::features::estados::repositories::EstadoRepository;
use crate::shared::headers;
use crate::shared::pagination::PageRequest;

/// State for estado handlers, wired explicitly in `main`.
#[derive(Clone)]
pub struct EstadoState {
    pub repository: Arc<EstadoRepository>,
    pub mapper: EstadoMapper,
}

/// Create a new estado
#[utoipa::path(
    post,
    path = "/api/estados",
    request_body = EstadoDto,
    responses(
        (status = 201, description = "Estado created", body = EstadoDto),
        (status = 400, description = "A new estado cannot already have an id")
    ),
    tag = "estados"
)]
pub async fn create_estado(
    State(state): State<EstadoState>,
    AppJson(dto): AppJson<EstadoDto>,
) -> Result<Response> {
    tracing::debug!("REST request to save Estado : {:?}", dto);
    save_new(&state, dto).await
}

async fn save_new(state: &EstadoState, dto: EstadoDto) -> Result<Response> {
    if dto.id.is_some() {
        let headers = headers::create_failure_alert("estado", "idexists");
        return Ok((StatusCode::BAD_REQUEST, headers).into_response());
    }

    let saved = state.repository.save(state.mapper.to_entity(&dto)).await?;
    let result = state.mapper.to_dto(&saved);
    let id = result
        .id
        .ok_or_else(|| AppError::Internal("estado persisted without an id".to_string()))?;

    let mut headers = headers::create_entity_creation_alert("estado", id);
    headers.insert(
        header::LOCATION,
        format!("/api/estados/{}", id).parse().unwrap(),
    );
    Ok((StatusCode::CREATED, headers, Json(result)).into_response())
}

/// Update an existing estado
///
/// A body without an id aliases to create, which existing clients rely on.
#[utoipa::path(
    put,
    path = "/api/estados",
    request_body = EstadoDto,
    responses(
        (status = 200, description = "Estado updated", body = EstadoDto),
        (status = 404, description = "No estado with the given id")
    ),
    tag = "estados"
)]
pub async fn update_estado(
    State(state): State<EstadoState>,
    AppJson(dto): AppJson<EstadoDto>,
) -> Result<Response> {
    tracing::debug!("REST request to update Estado : {:?}", dto);
    let Some(id) = dto.id else {
        return save_new(&state, dto).await;
    };

    let saved = state.repository.save(state.mapper.to_entity(&dto)).await?;
    let result = state.mapper.to_dto(&saved);
    let headers = headers::create_entity_update_alert("estado", id);
    Ok((StatusCode::OK, headers, Json(result)).into_response())
}

/// Get a page of estados
#[utoipa::path(
    get,
    path = "/api/estados",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of estados", body = [EstadoDto]),
        (status = 400, description = "Malformed pagination parameters")
    ),
    tag = "estados"
)]
pub async fn get_all_estados(
    State(state): State<EstadoState>,
    Query(page): Query<PageRequest>,
) -> Result<Response> {
    tracing::debug!("REST request to get a page of Estados");
    let result = state.repository.find_all(&page).await?;
    let headers = headers::pagination_headers(&result, &page, "/api/estados");
    let dtos = state.mapper.to_dtos(&result.items);
    Ok((StatusCode::OK, headers, Json(dtos)).into_response())
}

/// Get one estado by id
#[utoipa::path(
    get,
    path = "/api/estados/{id}",
    params(("id" = i64, Path, description = "Estado id")),
    responses(
        (status = 200, description = "Estado found", body = EstadoDto),
        (status = 404, description = "Estado not found")
    ),
    tag = "estados"
)]
pub async fn get_estado(
    State(state): State<EstadoState>,
    Path(id): Path<i64>,
) -> Result<Json<EstadoDto>> {
    tracing::debug!("REST request to get Estado : {}", id);
    let estado = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Estado {} not found", id)))?;
    Ok(Json(state.mapper.to_dto(&estado)))
}

/// Delete one estado by id
#[utoipa::path(
    delete,
    path = "/api/estados/{id}",
    params(("id" = i64, Path, description = "Estado id")),
    responses(
        (status = 200, description = "Estado deleted"),
        (status = 404, description = "Estado not found")
    ),
    tag = "estados"
)]
pub async fn delete_estado(
    State(state): State<EstadoState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    tracing::debug!("REST request to delete Estado : {}", id);
    if !state.repository.delete_by_id(id).await? {
        return Err(AppError::NotFound(format!("Estado {} not found", id)));
    }

    let headers = headers::create_entity_deletion_alert("estado", id);
    Ok((StatusCode::OK, headers).into_response())
}
