use crate::api::dto::{CreateGesRequest, GesQuery, GesResponse, UpdateGesRequest};
use crate::api::routes::AppState;
use crate::error::{MatrizError, Result};
use crate::models::Ges;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/ges",
    params(
        ("categoria" = Option<String>, Query, description = "Filter by hazard category"),
        ("activos" = Option<bool>, Query, description = "Only return active catalog entries")
    ),
    responses(
        (status = 200, description = "GES catalog entries", body = Vec<GesResponse>)
    )
)]
pub async fn list_ges(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GesQuery>,
) -> Result<Json<Vec<GesResponse>>> {
    let ges = state
        .repo
        .list_ges(query.categoria.as_deref(), query.activos)
        .await?;

    Ok(Json(ges.into_iter().map(ges_to_response).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/ges",
    request_body = CreateGesRequest,
    responses(
        (status = 201, description = "GES created successfully", body = GesResponse),
        (status = 409, description = "GES already exists in this category")
    )
)]
pub async fn create_ges(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateGesRequest>,
) -> Result<(StatusCode, Json<GesResponse>)> {
    if request.categoria.trim().is_empty() {
        return Err(MatrizError::invalid_input("categoria", "must not be empty"));
    }
    if request.nombre.trim().is_empty() {
        return Err(MatrizError::invalid_input("nombre", "must not be empty"));
    }

    let ges = state
        .repo
        .create_ges(
            &request.categoria,
            &request.nombre,
            request.descripcion.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ges_to_response(ges))))
}

#[utoipa::path(
    put,
    path = "/api/v1/ges/{id}",
    params(
        ("id" = Uuid, Path, description = "GES id")
    ),
    request_body = UpdateGesRequest,
    responses(
        (status = 200, description = "GES updated successfully", body = GesResponse),
        (status = 404, description = "GES not found")
    )
)]
pub async fn update_ges(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateGesRequest>,
) -> Result<Json<GesResponse>> {
    let ges = state
        .repo
        .update_ges(
            id,
            &request.categoria,
            &request.nombre,
            request.descripcion.as_deref(),
            request.activo,
        )
        .await?;

    Ok(Json(ges_to_response(ges)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/ges/{id}",
    params(
        ("id" = Uuid, Path, description = "GES id")
    ),
    responses(
        (status = 204, description = "GES deactivated"),
        (status = 404, description = "GES not found")
    )
)]
pub async fn delete_ges(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    // Historical evaluations keep referencing the row, so this only flips
    // the activo flag.
    state.repo.deactivate_ges(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn ges_to_response(ges: Ges) -> GesResponse {
    GesResponse {
        id: ges.id,
        categoria: ges.categoria,
        nombre: ges.nombre,
        descripcion: ges.descripcion,
        activo: ges.activo,
        created_at: ges.created_at,
        updated_at: ges.updated_at,
    }
}
