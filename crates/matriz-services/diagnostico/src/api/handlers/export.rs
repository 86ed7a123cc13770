use crate::api::dto::{ExportQuery, MatrizFilaResponse};
use crate::api::routes::AppState;
use crate::error::{MatrizError, Result};
use crate::models::MatrizFila;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use matriz_channels::DiagnosticoMessage;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/empresas/{id}/matriz",
    params(
        ("id" = Uuid, Path, description = "Empresa id")
    ),
    responses(
        (status = 200, description = "Risk matrix rows", body = Vec<MatrizFilaResponse>),
        (status = 404, description = "Empresa not found")
    )
)]
pub async fn get_matriz(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MatrizFilaResponse>>> {
    let filas = state.service.matriz(id).await?;
    Ok(Json(filas.into_iter().map(fila_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/empresas/{id}/matriz/export",
    params(
        ("id" = Uuid, Path, description = "Empresa id"),
        ("formato" = Option<String>, Query, description = "Export format: csv or xlsx")
    ),
    responses(
        (status = 200, description = "Matrix document as an attachment"),
        (status = 400, description = "Unknown export format"),
        (status = 404, description = "Empresa not found")
    )
)]
pub async fn export_matriz(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response> {
    let filas = state.service.matriz(id).await?;
    let num_filas = filas.len();

    let response = match query.formato.as_str() {
        "csv" => {
            let body = state.csv_exporter.export(&filas)?;
            attachment("text/csv; charset=utf-8", "matriz_riesgos.csv", body.into_bytes())
        }
        "xlsx" => {
            let body = state.xlsx_exporter.export(&filas)?;
            attachment(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                "matriz_riesgos.xlsx",
                body,
            )
        }
        other => {
            return Err(MatrizError::invalid_input(
                "formato",
                format!("unknown format '{other}', expected csv or xlsx"),
            ))
        }
    };

    state.publish_exporte_event(DiagnosticoMessage::MatrizExportada {
        empresa_id: id,
        formato: query.formato,
        filas: num_filas,
    });

    Ok(response)
}

fn attachment(content_type: &str, filename: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

fn fila_to_response(fila: MatrizFila) -> MatrizFilaResponse {
    MatrizFilaResponse {
        empresa: fila.empresa,
        nit: fila.nit,
        cargo: fila.cargo,
        zona: fila.zona,
        categoria: fila.categoria,
        ges: fila.ges,
        nd: fila.nd,
        ne: fila.ne,
        nc: fila.nc,
        np: fila.np,
        nr: fila.nr,
        interpretacion: fila.interpretacion,
        observaciones: fila.observaciones,
    }
}
