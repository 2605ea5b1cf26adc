//! Actix-web request metrics middleware.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::metrics::Metrics;

/// Route label for requests that matched no registered resource.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Outcome label for a response status.
///
/// The document route only ever answers 200, 404, 405 or 500, so those get
/// their own labels; anything else is bucketed by class.
pub fn response_outcome(status: StatusCode) -> &'static str {
    match status {
        StatusCode::OK => "served",
        StatusCode::NOT_FOUND => "not_found",
        StatusCode::METHOD_NOT_ALLOWED => "method_not_allowed",
        s if s.is_server_error() => "server_error",
        s if s.is_client_error() => "client_error",
        _ => "other",
    }
}

/// Records request counts, latency and outcome per matched route.
pub struct MetricsMiddleware {
    metrics: Metrics,
}

impl MetricsMiddleware {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
    metrics: Metrics,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let metrics = self.metrics.clone();
        let service = self.service.clone();
        let method = req.method().as_str().to_string();

        Box::pin(async move {
            metrics.http_requests_total.inc();

            let res = service.call(req).await?;
            let route = res
                .request()
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

            record(&metrics, &method, &route, res.status(), started.elapsed());
            Ok(res)
        })
    }
}

fn record(metrics: &Metrics, method: &str, route: &str, status: StatusCode, elapsed: Duration) {
    let seconds = elapsed.as_secs_f64();
    let code = status.as_str();

    metrics.http_request_duration_seconds.observe(seconds);
    metrics
        .http_requests_total_by_route
        .with_label_values(&[method, route, code])
        .inc();
    metrics
        .http_request_duration_seconds_by_route
        .with_label_values(&[method, route, code])
        .observe(seconds);
    metrics
        .http_responses_by_outcome_total
        .with_label_values(&[route, response_outcome(status)])
        .inc();
}
