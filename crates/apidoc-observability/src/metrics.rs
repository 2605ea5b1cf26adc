use prometheus::{
    Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
};

/// Process metrics, registered on a private registry so independent instances never collide.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_total_by_route: IntCounterVec,
    pub http_request_duration_seconds_by_route: HistogramVec,
    /// Labelled by route and response outcome (`served`, `not_found`, `method_not_allowed`, ...).
    pub http_responses_by_outcome_total: IntCounterVec,

    pub documents_generated_total: IntCounter,
    /// Labelled by `DocumentError::code`.
    pub document_generation_failures_total: IntCounterVec,
    pub document_generation_duration_seconds: Histogram,
    /// Labelled by `GateRejection::reason`.
    pub gate_rejections_total: IntCounterVec,
}

const GENERATION_BUCKETS: &[f64] = &[0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25];

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounter::with_opts(Opts::new(
            "http_requests_total",
            "Total number of HTTP requests",
        ))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_total_by_route = IntCounterVec::new(
            Opts::new(
                "http_requests_by_route_total",
                "HTTP requests by method, route and status",
            ),
            &["method", "route", "status"],
        )?;
        let http_request_duration_seconds_by_route = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_by_route_seconds",
                "HTTP request latency by method, route and status",
            ),
            &["method", "route", "status"],
        )?;
        let http_responses_by_outcome_total = IntCounterVec::new(
            Opts::new(
                "apidoc_http_responses_by_outcome_total",
                "HTTP responses by route and outcome",
            ),
            &["route", "outcome"],
        )?;

        let documents_generated_total = IntCounter::with_opts(Opts::new(
            "apidoc_documents_generated_total",
            "API-description documents generated successfully",
        ))?;
        let document_generation_failures_total = IntCounterVec::new(
            Opts::new(
                "apidoc_document_generation_failures_total",
                "API-description document generation failures by error code",
            ),
            &["code"],
        )?;
        let document_generation_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "apidoc_document_generation_duration_seconds",
                "Time spent assembling the API-description document",
            )
            .buckets(GENERATION_BUCKETS.to_vec()),
        )?;
        let gate_rejections_total = IntCounterVec::new(
            Opts::new(
                "apidoc_gate_rejections_total",
                "Document requests rejected before generation, by reason",
            ),
            &["reason"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_total_by_route.clone()))?;
        registry.register(Box::new(http_request_duration_seconds_by_route.clone()))?;
        registry.register(Box::new(http_responses_by_outcome_total.clone()))?;
        registry.register(Box::new(documents_generated_total.clone()))?;
        registry.register(Box::new(document_generation_failures_total.clone()))?;
        registry.register(Box::new(document_generation_duration_seconds.clone()))?;
        registry.register(Box::new(gate_rejections_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_total_by_route,
            http_request_duration_seconds_by_route,
            http_responses_by_outcome_total,
            documents_generated_total,
            document_generation_failures_total,
            document_generation_duration_seconds,
            gate_rejections_total,
        })
    }
}
