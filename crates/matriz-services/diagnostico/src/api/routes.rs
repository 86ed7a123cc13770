use crate::api::handlers::{
    create_cargo, create_empresa, create_ges, delete_cargo, delete_empresa, delete_evaluacion,
    delete_ges, evaluar, export_matriz, get_cargo, get_empresa, get_matriz, health_check,
    list_cargos, list_empresas, list_evaluaciones, list_ges, registrar_evaluacion, update_cargo,
    update_empresa, update_ges,
};
use crate::db::DiagnosticoRepository;
use crate::export::{CsvExporter, XlsxExporter};
use crate::service::MatrizService;
use axum::routing::{delete, get, post, put};
use axum::Router;
use matriz_channels::{broadcast, channels, DiagnosticoMessage};
use std::sync::Arc;
use tokio::sync::broadcast::Sender as BroadcastSender;
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state for the diagnostico service.
#[derive(Clone)]
pub struct AppState {
    /// Repository for all database operations.
    pub repo: DiagnosticoRepository,
    /// GTC-45 scoring and matrix assembly.
    pub service: MatrizService,
    /// Matrix exporter producing CSV documents.
    pub csv_exporter: CsvExporter,
    /// Matrix exporter producing xlsx workbooks.
    pub xlsx_exporter: XlsxExporter,
    /// Channel for empresa and cargo lifecycle events.
    pub entidad_events: BroadcastSender<DiagnosticoMessage>,
    /// Channel for evaluation writes and deletes.
    pub evaluacion_events: BroadcastSender<DiagnosticoMessage>,
    /// Channel for matrix export events.
    pub exporte_events: BroadcastSender<DiagnosticoMessage>,
}

impl AppState {
    /// Create a new AppState with broadcast channels.
    pub fn new(repo: DiagnosticoRepository) -> Self {
        let entidad_events =
            broadcast::<DiagnosticoMessage>(channels::DIAGNOSTICO_ENTIDADES, 256);
        let evaluacion_events =
            broadcast::<DiagnosticoMessage>(channels::DIAGNOSTICO_EVALUACIONES, 1024);
        let exporte_events =
            broadcast::<DiagnosticoMessage>(channels::DIAGNOSTICO_EXPORTES, 256);

        Self {
            service: MatrizService::new(repo.clone()),
            repo,
            csv_exporter: CsvExporter::new(),
            xlsx_exporter: XlsxExporter::new(),
            entidad_events,
            evaluacion_events,
            exporte_events,
        }
    }

    /// Publish an empresa or cargo lifecycle event (non-blocking).
    pub fn publish_entidad_event(&self, event: DiagnosticoMessage) {
        if let Err(e) = self.entidad_events.send(event) {
            warn!(error = ?e, "No subscribers for entidad event");
        }
    }

    /// Publish an evaluation event (non-blocking).
    pub fn publish_evaluacion_event(&self, event: DiagnosticoMessage) {
        if let Err(e) = self.evaluacion_events.send(event) {
            warn!(error = ?e, "No subscribers for evaluacion event");
        }
    }

    /// Publish an export event (non-blocking).
    pub fn publish_exporte_event(&self, event: DiagnosticoMessage) {
        if let Err(e) = self.exporte_events.send(event) {
            warn!(error = ?e, "No subscribers for exporte event");
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::empresas::create_empresa,
        crate::api::handlers::empresas::list_empresas,
        crate::api::handlers::empresas::get_empresa,
        crate::api::handlers::empresas::update_empresa,
        crate::api::handlers::empresas::delete_empresa,
        crate::api::handlers::cargos::create_cargo,
        crate::api::handlers::cargos::list_cargos,
        crate::api::handlers::cargos::get_cargo,
        crate::api::handlers::cargos::update_cargo,
        crate::api::handlers::cargos::delete_cargo,
        crate::api::handlers::ges::list_ges,
        crate::api::handlers::ges::create_ges,
        crate::api::handlers::ges::update_ges,
        crate::api::handlers::ges::delete_ges,
        crate::api::handlers::evaluaciones::evaluar,
        crate::api::handlers::evaluaciones::registrar_evaluacion,
        crate::api::handlers::evaluaciones::list_evaluaciones,
        crate::api::handlers::evaluaciones::delete_evaluacion,
        crate::api::handlers::export::get_matriz,
        crate::api::handlers::export::export_matriz,
    ),
    components(
        schemas(
            crate::api::dto::CreateEmpresaRequest,
            crate::api::dto::UpdateEmpresaRequest,
            crate::api::dto::EmpresaResponse,
            crate::api::dto::CreateCargoRequest,
            crate::api::dto::UpdateCargoRequest,
            crate::api::dto::CargoResponse,
            crate::api::dto::CreateGesRequest,
            crate::api::dto::UpdateGesRequest,
            crate::api::dto::GesResponse,
            crate::api::dto::EvaluarRequest,
            crate::api::dto::EvaluarResponse,
            crate::api::dto::RegistrarEvaluacionRequest,
            crate::api::dto::EvaluacionResponse,
            crate::api::dto::MatrizFilaResponse,
            crate::api::dto::HealthResponse,
        )
    ),
    tags(
        (name = "diagnostico", description = "GTC-45 risk matrix management API")
    )
)]
pub struct ApiDoc;

pub fn create_router(repo: DiagnosticoRepository) -> Router {
    let state = Arc::new(AppState::new(repo));

    let api_routes = Router::new()
        .route("/empresas", post(create_empresa))
        .route("/empresas", get(list_empresas))
        .route("/empresas/:id", get(get_empresa))
        .route("/empresas/:id", put(update_empresa))
        .route("/empresas/:id", delete(delete_empresa))
        .route("/empresas/:id/cargos", post(create_cargo))
        .route("/empresas/:id/cargos", get(list_cargos))
        .route("/empresas/:id/matriz", get(get_matriz))
        .route("/empresas/:id/matriz/export", get(export_matriz))
        .route("/cargos/:id", get(get_cargo))
        .route("/cargos/:id", put(update_cargo))
        .route("/cargos/:id", delete(delete_cargo))
        .route("/cargos/:id/evaluaciones", post(registrar_evaluacion))
        .route("/cargos/:id/evaluaciones", get(list_evaluaciones))
        .route(
            "/cargos/:cargo_id/evaluaciones/:ges_id",
            delete(delete_evaluacion),
        )
        .route("/ges", get(list_ges))
        .route("/ges", post(create_ges))
        .route("/ges/:id", put(update_ges))
        .route("/ges/:id", delete(delete_ges))
        .route("/evaluar", post(evaluar))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
