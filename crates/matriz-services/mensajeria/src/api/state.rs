use std::sync::Arc;
use tokio::sync::broadcast::Sender as BroadcastSender;
use tracing::warn;

use crate::config::MensajeriaConfig;
use crate::graph::GraphClient;
use matriz_channels::{broadcast, channels, MensajeriaMessage};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MensajeriaConfig>,
    pub graph: GraphClient,
    pub entrantes: BroadcastSender<MensajeriaMessage>,
    pub salientes: BroadcastSender<MensajeriaMessage>,
}

impl AppState {
    pub fn new(config: MensajeriaConfig, graph: GraphClient) -> Self {
        let entrantes = broadcast::<MensajeriaMessage>(channels::MENSAJERIA_ENTRANTES, 256);
        let salientes = broadcast::<MensajeriaMessage>(channels::MENSAJERIA_SALIENTES, 256);

        Self {
            config: Arc::new(config),
            graph,
            entrantes,
            salientes,
        }
    }

    pub fn publish_entrante(&self, event: MensajeriaMessage) {
        if let Err(e) = self.entrantes.send(event) {
            warn!(error = ?e, "No subscribers for inbound message event");
        }
    }

    pub fn publish_saliente(&self, event: MensajeriaMessage) {
        if let Err(e) = self.salientes.send(event) {
            warn!(error = ?e, "No subscribers for outbound message event");
        }
    }
}
