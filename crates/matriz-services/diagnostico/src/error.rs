//! Error handling for the diagnostico service.
//!
//! Uses `matriz_error::MatrizError` as the unified error type with
//! feature-gated conversions for sqlx and axum.

pub use matriz_error::{MatrizError, Result};

/// Extension trait for diagnostico-specific error construction
pub trait DiagnosticoErrorExt {
    /// Creates an empresa not found error
    fn empresa_not_found(empresa_id: impl Into<String>) -> MatrizError {
        MatrizError::not_found("empresa", empresa_id)
    }

    /// Creates a cargo not found error
    fn cargo_not_found(cargo_id: impl Into<String>) -> MatrizError {
        MatrizError::not_found("cargo", cargo_id)
    }

    /// Creates a GES not found error
    fn ges_not_found(ges_id: impl Into<String>) -> MatrizError {
        MatrizError::not_found("ges", ges_id)
    }

    /// Creates an evaluacion not found error
    fn evaluacion_not_found(cargo_id: impl Into<String>) -> MatrizError {
        MatrizError::not_found("evaluacion", cargo_id)
    }

    /// Maps a GTC-45 level error to an invalid-input error
    fn nivel_invalido(err: matriz_gtc45::Error) -> MatrizError {
        let matriz_gtc45::Error::NivelInvalido {
            campo, permitidos, ..
        } = err;
        MatrizError::invalid_input(campo, format!("must be one of {permitidos}"))
    }
}

impl DiagnosticoErrorExt for MatrizError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empresa_not_found() {
        let err = MatrizError::empresa_not_found("abc-123");
        assert!(err.to_string().contains("empresa"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_cargo_not_found() {
        let err = MatrizError::cargo_not_found("def-456");
        assert!(err.to_string().contains("cargo"));
    }

    #[test]
    fn test_nivel_invalido_maps_to_invalid_input() {
        let domain_err = matriz_gtc45::evaluar_crudo(5, 1, 10).unwrap_err();
        let err = MatrizError::nivel_invalido(domain_err);
        assert!(err.is_client_error());
        assert!(err.to_string().contains("nd"));
        assert!(err.to_string().contains("0, 2, 6, 10"));
    }
}
