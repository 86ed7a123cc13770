use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalog entry: Grupo de Exposición Similar (GES).
///
/// Catalog rows are never deleted; retiring one sets `activo = false` so
/// existing evaluations keep their reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ges {
    pub id: Uuid,
    pub categoria: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
