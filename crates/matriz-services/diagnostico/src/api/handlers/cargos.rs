use crate::api::dto::{CargoResponse, CreateCargoRequest, UpdateCargoRequest};
use crate::api::routes::AppState;
use crate::error::{MatrizError, Result};
use crate::models::Cargo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use matriz_channels::DiagnosticoMessage;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v1/empresas/{empresa_id}/cargos",
    params(
        ("empresa_id" = Uuid, Path, description = "Empresa id")
    ),
    request_body = CreateCargoRequest,
    responses(
        (status = 201, description = "Cargo created successfully", body = CargoResponse),
        (status = 404, description = "Empresa not found"),
        (status = 409, description = "Cargo already exists for this empresa")
    )
)]
pub async fn create_cargo(
    State(state): State<Arc<AppState>>,
    Path(empresa_id): Path<Uuid>,
    Json(request): Json<CreateCargoRequest>,
) -> Result<(StatusCode, Json<CargoResponse>)> {
    if request.nombre.trim().is_empty() {
        return Err(MatrizError::invalid_input("nombre", "must not be empty"));
    }

    let cargo = state
        .repo
        .create_cargo(
            empresa_id,
            &request.nombre,
            request.descripcion.as_deref(),
            request.zona.as_deref(),
            request.num_trabajadores,
        )
        .await?;

    state.publish_entidad_event(DiagnosticoMessage::CargoCreado {
        empresa_id,
        cargo_id: cargo.id,
        nombre: cargo.nombre.clone(),
    });

    Ok((StatusCode::CREATED, Json(cargo_to_response(cargo))))
}

#[utoipa::path(
    get,
    path = "/api/v1/empresas/{empresa_id}/cargos",
    params(
        ("empresa_id" = Uuid, Path, description = "Empresa id")
    ),
    responses(
        (status = 200, description = "Cargos for the empresa", body = Vec<CargoResponse>),
        (status = 404, description = "Empresa not found")
    )
)]
pub async fn list_cargos(
    State(state): State<Arc<AppState>>,
    Path(empresa_id): Path<Uuid>,
) -> Result<Json<Vec<CargoResponse>>> {
    let cargos = state.repo.list_cargos(empresa_id).await?;
    Ok(Json(cargos.into_iter().map(cargo_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/cargos/{id}",
    params(
        ("id" = Uuid, Path, description = "Cargo id")
    ),
    responses(
        (status = 200, description = "Cargo found", body = CargoResponse),
        (status = 404, description = "Cargo not found")
    )
)]
pub async fn get_cargo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CargoResponse>> {
    let cargo = state.repo.get_cargo(id).await?;
    Ok(Json(cargo_to_response(cargo)))
}

#[utoipa::path(
    put,
    path = "/api/v1/cargos/{id}",
    params(
        ("id" = Uuid, Path, description = "Cargo id")
    ),
    request_body = UpdateCargoRequest,
    responses(
        (status = 200, description = "Cargo updated successfully", body = CargoResponse),
        (status = 404, description = "Cargo not found")
    )
)]
pub async fn update_cargo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCargoRequest>,
) -> Result<Json<CargoResponse>> {
    if request.nombre.trim().is_empty() {
        return Err(MatrizError::invalid_input("nombre", "must not be empty"));
    }

    let cargo = state
        .repo
        .update_cargo(
            id,
            &request.nombre,
            request.descripcion.as_deref(),
            request.zona.as_deref(),
            request.num_trabajadores,
        )
        .await?;

    Ok(Json(cargo_to_response(cargo)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/cargos/{id}",
    params(
        ("id" = Uuid, Path, description = "Cargo id")
    ),
    responses(
        (status = 204, description = "Cargo deleted successfully"),
        (status = 404, description = "Cargo not found")
    )
)]
pub async fn delete_cargo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.repo.delete_cargo(id).await?;

    state.publish_entidad_event(DiagnosticoMessage::CargoEliminado { cargo_id: id });

    Ok(StatusCode::NO_CONTENT)
}

fn cargo_to_response(cargo: Cargo) -> CargoResponse {
    CargoResponse {
        id: cargo.id,
        empresa_id: cargo.empresa_id,
        nombre: cargo.nombre,
        descripcion: cargo.descripcion,
        zona: cargo.zona,
        num_trabajadores: cargo.num_trabajadores,
        created_at: cargo.created_at,
        updated_at: cargo.updated_at,
    }
}
