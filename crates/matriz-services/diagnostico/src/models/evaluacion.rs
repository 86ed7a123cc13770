use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scored hazard assignment: one (cargo, GES) pair with its GTC-45 levels.
///
/// `np`, `nr` and `interpretacion` are derived columns, recomputed server-side
/// from `nd`/`ne`/`nc` on every insert and update. They are stored only so
/// the matrix can be assembled without re-scoring.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Evaluacion {
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

/// One row of a company's assembled risk matrix (cargo × GES × evaluation).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatrizFila {
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
