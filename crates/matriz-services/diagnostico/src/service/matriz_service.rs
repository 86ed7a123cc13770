use crate::db::DiagnosticoRepository;
use crate::error::{DiagnosticoErrorExt, MatrizError, Result};
use crate::models::{Evaluacion, MatrizFila};
use matriz_gtc45::{evaluar_crudo, EvaluacionRiesgo};
use uuid::Uuid;

/// Business layer over the repository.
///
/// Every evaluation write passes through the GTC-45 domain crate first, so
/// the stored derived columns can never drift from the ordinal inputs.
#[derive(Debug, Clone)]
pub struct MatrizService {
    repository: DiagnosticoRepository,
}

impl MatrizService {
    pub fn new(repository: DiagnosticoRepository) -> Self {
        Self { repository }
    }

    /// Stateless scoring of a raw (nd, ne, nc) triple.
    pub fn evaluar(&self, nd: u8, ne: u8, nc: u8) -> Result<EvaluacionRiesgo> {
        evaluar_crudo(nd, ne, nc).map_err(MatrizError::nivel_invalido)
    }

    /// Score and persist one hazard assignment for a cargo.
    ///
    /// The derived products are recomputed here on every call; the raw
    /// inputs are the only thing the caller controls.
    pub async fn registrar_evaluacion(
        &self,
        cargo_id: Uuid,
        ges_id: Uuid,
        nd: u8,
        ne: u8,
        nc: u8,
        observaciones: Option<&str>,
    ) -> Result<Evaluacion> {
        let eval = self.evaluar(nd, ne, nc)?;

        self.repository
            .upsert_evaluacion(
                cargo_id,
                ges_id,
                eval.nd.valor() as i16,
                eval.ne.valor() as i16,
                eval.nc.valor() as i16,
                eval.np as i32,
                eval.nr as i32,
                &eval.interpretacion.to_string(),
                observaciones,
            )
            .await
    }

    /// Assemble the full risk matrix for a company.
    pub async fn matriz(&self, empresa_id: Uuid) -> Result<Vec<MatrizFila>> {
        self.repository.matriz(empresa_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matriz_gtc45::Interpretacion;
    use sqlx::postgres::PgPoolOptions;

    fn service() -> MatrizService {
        // Lazy pool: never connects, enough to exercise the pure paths.
        let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/unused");
        MatrizService::new(DiagnosticoRepository::new(pool.unwrap()))
    }

    #[tokio::test]
    async fn test_evaluar_valid_triple() {
        let eval = service().evaluar(6, 3, 25).unwrap();
        assert_eq!(eval.np, 18);
        assert_eq!(eval.nr, 450);
        assert_eq!(eval.interpretacion, Interpretacion::NoAceptableConControl);
    }

    #[tokio::test]
    async fn test_evaluar_rejects_out_of_set() {
        let err = service().evaluar(5, 1, 10).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("nd"));
    }
}
