use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmpresaRequest {
    pub nit: String,
    pub nombre: String,
    pub sector: Option<String>,
    #[serde(default)]
    pub num_trabajadores: i32,
    pub email_contacto: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmpresaRequest {
    pub nombre: String,
    pub sector: Option<String>,
    #[serde(default)]
    pub num_trabajadores: i32,
    pub email_contacto: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmpresaResponse {
    pub id: Uuid,
    pub nit: String,
    pub nombre: String,
    pub sector: Option<String>,
    pub num_trabajadores: i32,
    pub email_contacto: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCargoRequest {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub zona: Option<String>,
    #[serde(default)]
    pub num_trabajadores: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCargoRequest {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub zona: Option<String>,
    #[serde(default)]
    pub num_trabajadores: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CargoResponse {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub zona: Option<String>,
    pub num_trabajadores: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGesRequest {
    pub categoria: String,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateGesRequest {
    pub categoria: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GesResponse {
    pub id: Uuid,
    pub categoria: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GesQuery {
    pub categoria: Option<String>,
    #[serde(default)]
    pub activos: bool,
}

/// Raw ordinal levels for stateless scoring.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluarRequest {
    pub nd: u8,
    pub ne: u8,
    pub nc: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluarResponse {
    pub nd: u8,
    pub ne: u8,
    pub nc: u8,
    pub np: u32,
    pub nr: u32,
    pub interpretacion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrarEvaluacionRequest {
    pub ges_id: Uuid,
    pub nd: u8,
    pub ne: u8,
    pub nc: u8,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluacionResponse {
    pub id: Uuid,
    pub cargo_id: Uuid,
    pub ges_id: Uuid,
    pub nd: i16,
    pub ne: i16,
    pub nc: i16,
    pub np: i32,
    pub nr: i32,
    pub interpretacion: String,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatrizFilaResponse {
    pub empresa: String,
    pub nit: String,
    pub cargo: String,
    pub zona: Option<String>,
    pub categoria: String,
    pub ges: String,
    pub nd: i16,
    pub ne: i16,
    pub nc: i16,
    pub np: i32,
    pub nr: i32,
    pub interpretacion: String,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportQuery {
    #[serde(default = "default_formato")]
    pub formato: String,
}

fn default_formato() -> String {
    "csv".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
