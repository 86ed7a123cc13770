//! In-process event channels for the Matriz SST platform.
//!
//! Services publish lifecycle events on named tokio broadcast channels so
//! observers (audit log writers, dashboards) can subscribe without coupling
//! the HTTP handlers to them. Publishing never blocks and a send with no
//! subscribers is not an error.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Well-known channel names.
pub mod channels {
    pub const DIAGNOSTICO_ENTIDADES: &str = "diagnostico.entidades";
    pub const DIAGNOSTICO_EVALUACIONES: &str = "diagnostico.evaluaciones";
    pub const DIAGNOSTICO_EXPORTES: &str = "diagnostico.exportes";
    pub const MENSAJERIA_ENTRANTES: &str = "mensajeria.entrantes";
    pub const MENSAJERIA_SALIENTES: &str = "mensajeria.salientes";
}

/// Create a named broadcast channel and return its sender.
///
/// The name is only used for tracing; receivers are created from the
/// returned sender with [`broadcast::Sender::subscribe`].
pub fn broadcast<T: Clone>(name: &str, capacity: usize) -> broadcast::Sender<T> {
    tracing::debug!(channel = name, capacity, "creating broadcast channel");
    let (tx, _rx) = broadcast::channel(capacity);
    tx
}

/// Events published by the diagnostico service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DiagnosticoMessage {
    EmpresaCreada {
        empresa_id: Uuid,
        nit: String,
    },
    EmpresaActualizada {
        empresa_id: Uuid,
    },
    EmpresaEliminada {
        empresa_id: Uuid,
    },
    CargoCreado {
        empresa_id: Uuid,
        cargo_id: Uuid,
        nombre: String,
    },
    CargoEliminado {
        cargo_id: Uuid,
    },
    EvaluacionRegistrada {
        cargo_id: Uuid,
        ges_id: Uuid,
        nr: i32,
        interpretacion: String,
    },
    EvaluacionEliminada {
        cargo_id: Uuid,
        ges_id: Uuid,
    },
    MatrizExportada {
        empresa_id: Uuid,
        formato: String,
        filas: usize,
    },
}

/// Events published by the mensajeria service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MensajeriaMessage {
    Entrante {
        de: String,
        cuerpo: String,
        recibido_en: chrono::DateTime<chrono::Utc>,
    },
    Saliente {
        para: String,
        message_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_delivers_to_subscriber() {
        let tx = broadcast::<DiagnosticoMessage>(channels::DIAGNOSTICO_ENTIDADES, 16);
        let mut rx = tx.subscribe();

        let empresa_id = Uuid::new_v4();
        tx.send(DiagnosticoMessage::EmpresaCreada {
            empresa_id,
            nit: "900123456-7".to_string(),
        })
        .unwrap();

        match rx.recv().await.unwrap() {
            DiagnosticoMessage::EmpresaCreada { empresa_id: id, nit } => {
                assert_eq!(id, empresa_id);
                assert_eq!(nit, "900123456-7");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_send_without_subscribers_is_err_not_panic() {
        let tx = broadcast::<MensajeriaMessage>(channels::MENSAJERIA_SALIENTES, 8);
        let result = tx.send(MensajeriaMessage::Saliente {
            para: "573001112233".to_string(),
            message_id: "wamid.test".to_string(),
        });
        assert!(result.is_err());
    }
}
