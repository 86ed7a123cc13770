use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered company working through the SST diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Empresa {
    pub id: Uuid,
    pub nit: String,
    pub nombre: String,
    pub sector: Option<String>,
    pub num_trabajadores: i32,
    pub email_contacto: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
