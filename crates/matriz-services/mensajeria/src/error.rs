//! Error handling for the mensajeria service.

pub use matriz_error::{MatrizError, Result};

/// Extension trait for mensajeria-specific error construction
pub trait MensajeriaErrorExt {
    /// Creates an error for a rejected webhook verification attempt
    fn verificacion_rechazada() -> MatrizError {
        MatrizError::permission_denied("verify", "webhook")
    }

    /// Creates an error for a Graph API response outside the 2xx range
    fn graph_api(status: u16, body: impl Into<String>) -> MatrizError {
        MatrizError::network(format!("Graph API returned {status}: {}", body.into()))
    }
}

impl MensajeriaErrorExt for MatrizError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verificacion_rechazada_is_client_error() {
        let err = MatrizError::verificacion_rechazada();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_graph_api_error_message() {
        let err = MatrizError::graph_api(401, "invalid token");
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid token"));
    }
}
