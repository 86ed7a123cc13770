use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A job position ("cargo") within a company.
///
/// A cargo accumulates hazard assignments (GES) scored independently; the
/// set of scored assignments across all cargos forms the company's risk
/// matrix.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cargo {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub zona: Option<String>,
    pub num_trabajadores: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
