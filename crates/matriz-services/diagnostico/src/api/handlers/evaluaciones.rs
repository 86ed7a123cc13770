use crate::api::dto::{
    EvaluacionResponse, EvaluarRequest, EvaluarResponse, RegistrarEvaluacionRequest,
};
use crate::api::routes::AppState;
use crate::error::Result;
use crate::models::Evaluacion;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use matriz_channels::DiagnosticoMessage;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v1/evaluar",
    request_body = EvaluarRequest,
    responses(
        (status = 200, description = "Risk levels computed", body = EvaluarResponse),
        (status = 400, description = "Input level outside the GTC-45 ordinal sets")
    )
)]
pub async fn evaluar(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EvaluarRequest>,
) -> Result<Json<EvaluarResponse>> {
    let eval = state.service.evaluar(request.nd, request.ne, request.nc)?;

    Ok(Json(EvaluarResponse {
        nd: eval.nd.valor(),
        ne: eval.ne.valor(),
        nc: eval.nc.valor(),
        np: eval.np,
        nr: eval.nr,
        interpretacion: eval.interpretacion.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/cargos/{cargo_id}/evaluaciones",
    params(
        ("cargo_id" = Uuid, Path, description = "Cargo id")
    ),
    request_body = RegistrarEvaluacionRequest,
    responses(
        (status = 200, description = "Evaluation stored", body = EvaluacionResponse),
        (status = 400, description = "Input level outside the GTC-45 ordinal sets"),
        (status = 404, description = "Cargo or GES not found")
    )
)]
pub async fn registrar_evaluacion(
    State(state): State<Arc<AppState>>,
    Path(cargo_id): Path<Uuid>,
    Json(request): Json<RegistrarEvaluacionRequest>,
) -> Result<Json<EvaluacionResponse>> {
    let evaluacion = state
        .service
        .registrar_evaluacion(
            cargo_id,
            request.ges_id,
            request.nd,
            request.ne,
            request.nc,
            request.observaciones.as_deref(),
        )
        .await?;

    state.publish_evaluacion_event(DiagnosticoMessage::EvaluacionRegistrada {
        cargo_id,
        ges_id: request.ges_id,
        nr: evaluacion.nr,
        interpretacion: evaluacion.interpretacion.clone(),
    });

    Ok(Json(evaluacion_to_response(evaluacion)))
}

#[utoipa::path(
    get,
    path = "/api/v1/cargos/{cargo_id}/evaluaciones",
    params(
        ("cargo_id" = Uuid, Path, description = "Cargo id")
    ),
    responses(
        (status = 200, description = "Evaluations for the cargo", body = Vec<EvaluacionResponse>),
        (status = 404, description = "Cargo not found")
    )
)]
pub async fn list_evaluaciones(
    State(state): State<Arc<AppState>>,
    Path(cargo_id): Path<Uuid>,
) -> Result<Json<Vec<EvaluacionResponse>>> {
    let evaluaciones = state.repo.list_evaluaciones(cargo_id).await?;

    Ok(Json(
        evaluaciones
            .into_iter()
            .map(evaluacion_to_response)
            .collect(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/cargos/{cargo_id}/evaluaciones/{ges_id}",
    params(
        ("cargo_id" = Uuid, Path, description = "Cargo id"),
        ("ges_id" = Uuid, Path, description = "GES id")
    ),
    responses(
        (status = 204, description = "Evaluation deleted"),
        (status = 404, description = "Evaluation not found")
    )
)]
pub async fn delete_evaluacion(
    State(state): State<Arc<AppState>>,
    Path((cargo_id, ges_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode> {
    state.repo.delete_evaluacion(cargo_id, ges_id).await?;

    state.publish_evaluacion_event(DiagnosticoMessage::EvaluacionEliminada { cargo_id, ges_id });

    Ok(StatusCode::NO_CONTENT)
}

fn evaluacion_to_response(evaluacion: Evaluacion) -> EvaluacionResponse {
    EvaluacionResponse {
        id: evaluacion.id,
        cargo_id: evaluacion.cargo_id,
        ges_id: evaluacion.ges_id,
        nd: evaluacion.nd,
        ne: evaluacion.ne,
        nc: evaluacion.nc,
        np: evaluacion.np,
        nr: evaluacion.nr,
        interpretacion: evaluacion.interpretacion,
        observaciones: evaluacion.observaciones,
        created_at: evaluacion.created_at,
        updated_at: evaluacion.updated_at,
    }
}
