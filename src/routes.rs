use axum::{extract::Request, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use crate::handlers::{energy, health, index};
use crate::repositories::{DayCache, TelemetryProvider};
use crate::services::{DayCacheLoader, MonthlyAverager};

#[derive(Clone)]
pub struct AppState {
    pub loader: DayCacheLoader,
    pub averager: MonthlyAverager,
}

impl AppState {
    /// Wires a fresh, empty day cache in front of `provider`.
    pub fn new(provider: Arc<dyn TelemetryProvider>) -> Self {
        Self::with_cache(DayCache::new(), provider)
    }

    pub fn with_cache(cache: DayCache, provider: Arc<dyn TelemetryProvider>) -> Self {
        let loader = DayCacheLoader::new(cache, provider);
        let averager = MonthlyAverager::new(loader.clone());
        Self { loader, averager }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/solar", get(energy::get_solar))
        .route("/{feed}/day/{date}", get(energy::get_day))
        .route(
            "/{feed}/average/{day_type}/{date}",
            get(energy::get_average),
        )
        .fallback(energy::api_not_found);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .fallback(index::index)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request| {
                            tracing::span!(
                                Level::INFO,
                                "http_request",
                                method = %request.method(),
                                uri = %request.uri(),
                            )
                        })
                        .on_response(
                            |_response: &axum::response::Response,
                             latency: std::time::Duration,
                             _span: &tracing::Span| {
                                tracing::event!(Level::INFO, latency = ?latency, "request completed");
                            },
                        ),
                )
                .layer(CorsLayer::permissive()),
        )
}
