//! Server assembly: configuration in, running Actix-web server out.

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use apidoc_actix::IssuerResolver;
use apidoc_config::{Config, EndpointsConfig};
use apidoc_core::RequestGate;
use apidoc_observability::actix::MetricsMiddleware;
use apidoc_observability::{init_telemetry, shutdown_telemetry, Metrics, ObservedGenerator};
use apidoc_openapi::{DocumentAssembler, EndpointRegistry, ProtocolEndpoint};
use apidoc_ports::DynDocumentGenerator;

pub const SERVICE_NAME: &str = "oidc-apidoc-server";

/// Registry with each protocol endpoint switched on or off per `endpoints`.
pub fn registry_from_config(endpoints: &EndpointsConfig) -> EndpointRegistry {
    let flags = [
        (ProtocolEndpoint::Discovery, endpoints.discovery),
        (ProtocolEndpoint::Authorize, endpoints.authorize),
        (ProtocolEndpoint::Token, endpoints.token),
        (ProtocolEndpoint::UserInfo, endpoints.userinfo),
        (ProtocolEndpoint::DeviceAuthorization, endpoints.device_authorization),
        (ProtocolEndpoint::Introspection, endpoints.introspection),
        (ProtocolEndpoint::Revocation, endpoints.revocation),
        (ProtocolEndpoint::EndSession, endpoints.end_session),
        (ProtocolEndpoint::CheckSession, endpoints.check_session),
    ];

    flags
        .into_iter()
        .fold(EndpointRegistry::with_defaults(), |registry, (endpoint, enabled)| {
            registry.with_enabled(endpoint, enabled)
        })
}

pub fn assembler_from_config(config: &Config) -> DocumentAssembler {
    DocumentAssembler::new(Arc::new(registry_from_config(&config.endpoints)))
        .with_schema_version(config.document.schema_version)
        .with_unsupported_policy(config.document.unsupported_policy)
}

/// Everything the HTTP layer needs, built once at startup and shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub gate: RequestGate,
    pub issuer: IssuerResolver,
    pub generator: DynDocumentGenerator,
    pub metrics: Metrics,
    pub swagger_path: String,
}

impl AppState {
    pub fn from_config(config: &Config, metrics: Metrics) -> Self {
        let generator: DynDocumentGenerator = Arc::new(ObservedGenerator::new(
            Arc::new(assembler_from_config(config)),
            metrics.clone(),
        ));

        Self {
            gate: RequestGate::new(config.endpoints.swagger_enabled),
            issuer: IssuerResolver::new(config.issuer.uri.clone(), config.issuer.lower_case),
            generator,
            metrics,
            swagger_path: config.endpoints.swagger_path.clone(),
        }
    }

    /// Swap the generator, e.g. for a custom implementation of the port.
    pub fn with_generator(mut self, generator: DynDocumentGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.gate))
            .app_data(web::Data::new(self.issuer.clone()))
            .app_data(web::Data::new(self.generator.clone()))
            .app_data(web::Data::new(self.metrics.clone()));
        apidoc_actix::configure(cfg, &self.swagger_path);
    }
}

pub async fn run() -> std::io::Result<()> {
    if let Err(e) = init_telemetry(SERVICE_NAME) {
        eprintln!("Failed to initialize telemetry: {e}");
    }

    let config = Config::default();
    tracing::info!(config = ?config.sanitized(), "Loaded configuration");

    let metrics = Metrics::new().map_err(|e| std::io::Error::other(e.to_string()))?;
    let state = AppState::from_config(&config, metrics);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        swagger_path = %state.swagger_path,
        swagger_enabled = config.endpoints.swagger_enabled,
        "Starting API description server"
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(MetricsMiddleware::new(state.metrics.clone()))
            .wrap(TracingLogger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run();

    let result = server.await;
    shutdown_telemetry();
    result
}
