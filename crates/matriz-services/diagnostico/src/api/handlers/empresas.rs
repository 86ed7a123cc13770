use crate::api::dto::{CreateEmpresaRequest, EmpresaResponse, UpdateEmpresaRequest};
use crate::api::routes::AppState;
use crate::error::{MatrizError, Result};
use crate::models::Empresa;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use matriz_channels::DiagnosticoMessage;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v1/empresas",
    request_body = CreateEmpresaRequest,
    responses(
        (status = 201, description = "Empresa created successfully", body = EmpresaResponse),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Empresa already exists")
    )
)]
pub async fn create_empresa(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateEmpresaRequest>,
) -> Result<(StatusCode, Json<EmpresaResponse>)> {
    if request.nit.trim().is_empty() {
        return Err(MatrizError::invalid_input("nit", "must not be empty"));
    }
    if request.nombre.trim().is_empty() {
        return Err(MatrizError::invalid_input("nombre", "must not be empty"));
    }

    let empresa = state
        .repo
        .create_empresa(
            &request.nit,
            &request.nombre,
            request.sector.as_deref(),
            request.num_trabajadores,
            request.email_contacto.as_deref(),
        )
        .await?;

    state.publish_entidad_event(DiagnosticoMessage::EmpresaCreada {
        empresa_id: empresa.id,
        nit: empresa.nit.clone(),
    });

    Ok((StatusCode::CREATED, Json(empresa_to_response(empresa))))
}

#[utoipa::path(
    get,
    path = "/api/v1/empresas",
    responses(
        (status = 200, description = "List of empresas", body = Vec<EmpresaResponse>)
    )
)]
pub async fn list_empresas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmpresaResponse>>> {
    let empresas = state.repo.list_empresas().await?;
    Ok(Json(empresas.into_iter().map(empresa_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/empresas/{id}",
    params(
        ("id" = Uuid, Path, description = "Empresa id")
    ),
    responses(
        (status = 200, description = "Empresa found", body = EmpresaResponse),
        (status = 404, description = "Empresa not found")
    )
)]
pub async fn get_empresa(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmpresaResponse>> {
    let empresa = state.repo.get_empresa(id).await?;
    Ok(Json(empresa_to_response(empresa)))
}

#[utoipa::path(
    put,
    path = "/api/v1/empresas/{id}",
    params(
        ("id" = Uuid, Path, description = "Empresa id")
    ),
    request_body = UpdateEmpresaRequest,
    responses(
        (status = 200, description = "Empresa updated successfully", body = EmpresaResponse),
        (status = 404, description = "Empresa not found")
    )
)]
pub async fn update_empresa(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEmpresaRequest>,
) -> Result<Json<EmpresaResponse>> {
    if request.nombre.trim().is_empty() {
        return Err(MatrizError::invalid_input("nombre", "must not be empty"));
    }

    let empresa = state
        .repo
        .update_empresa(
            id,
            &request.nombre,
            request.sector.as_deref(),
            request.num_trabajadores,
            request.email_contacto.as_deref(),
        )
        .await?;

    state.publish_entidad_event(DiagnosticoMessage::EmpresaActualizada { empresa_id: id });

    Ok(Json(empresa_to_response(empresa)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/empresas/{id}",
    params(
        ("id" = Uuid, Path, description = "Empresa id")
    ),
    responses(
        (status = 204, description = "Empresa deleted successfully"),
        (status = 404, description = "Empresa not found")
    )
)]
pub async fn delete_empresa(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.repo.delete_empresa(id).await?;

    state.publish_entidad_event(DiagnosticoMessage::EmpresaEliminada { empresa_id: id });

    Ok(StatusCode::NO_CONTENT)
}

fn empresa_to_response(empresa: Empresa) -> EmpresaResponse {
    EmpresaResponse {
        id: empresa.id,
        nit: empresa.nit,
        nombre: empresa.nombre,
        sector: empresa.sector,
        num_trabajadores: empresa.num_trabajadores,
        email_contacto: empresa.email_contacto,
        created_at: empresa.created_at,
        updated_at: empresa.updated_at,
    }
}
