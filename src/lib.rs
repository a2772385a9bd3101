//! # formforge - natural-language form builder
//!
//! formforge turns a short description ("a job application form") into a
//! structured form definition, lets clients edit it, and exports it as JSON
//! or a standalone HTML document.
//!
//! ## Features
//!
//! - **LLM generation**: Ollama or OpenAI backends, with markdown/prose-tolerant JSON extraction
//! - **Template fallback**: keyword-routed forms whenever the LLM path fails
//! - **Editing**: pure add/remove/update transitions on an owned form state
//! - **Export**: pretty JSON and escaped, self-contained HTML
//! - **Metrics**: Prometheus metrics for monitoring
//! - **Health Checks**: Kubernetes-ready health endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formforge::generation::FormOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let orchestrator = FormOrchestrator::template_only();
//!     let generated = orchestrator.handle_generate("customer feedback survey").await?;
//!     println!("{}", formforge::render::export_json(&generated.form)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: form types and the generator port
//! - **Generation**: LLM and template generators plus the orchestrator
//! - **Editor / Render**: state transitions and output formats
//! - **Adapters**: HTTP handlers, health, metrics, rate limiting
//! - **Config**: configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod editor;
pub mod generation;
pub mod llm;
pub mod render;

use crate::adapters::api_handler::{self, AppState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::metrics_handler::{MetricsCollector, MetricsHandler};
use crate::config::Settings;
use crate::generation::FormOrchestrator;
use crate::render::HtmlExporter;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the shared state for a server from settings
pub fn build_state(settings: &Settings) -> anyhow::Result<AppState> {
    let metrics = Arc::new(MetricsCollector::new()?);
    let orchestrator = FormOrchestrator::from_settings(&settings.llm, settings.generation.llm_enabled)
        .with_metrics(metrics.clone());

    Ok(AppState {
        orchestrator: Arc::new(orchestrator),
        html: Arc::new(HtmlExporter::new()?),
        metrics,
    })
}

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `state` - Orchestrator, HTML exporter and metrics shared by the API handlers
/// * `settings` - Application settings (rate limiting)
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(state: AppState, settings: &Settings) -> Router {
    let health_handler = Arc::new(HealthHandler::new(state.orchestrator.clone()));
    let metrics_handler = Arc::new(MetricsHandler::new(state.metrics.clone()));

    // Public routes (never rate limited)
    let public_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .route("/metrics", get({
            let handler = metrics_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.metrics().await }
            }
        }));

    let api_router = Router::new()
        .route("/generate-form", post(api_handler::generate_form))
        .route("/forms/export/json", post(api_handler::export_json))
        .route("/forms/export/html", post(api_handler::export_html))
        .route("/forms/preview", post(api_handler::preview))
        .route("/forms/edit", post(api_handler::edit_form))
        .with_state(state);

    let mut api_router = Router::new().nest("/api", api_router);

    // Apply Rate Limiting to API routes if enabled
    if let Some(rate_limit) = &settings.rate_limit {
        if rate_limit.enabled {
            let limiter = crate::adapters::rate_limit::create_limiter(
                rate_limit.requests_per_second,
                rate_limit.burst_size,
            );

            api_router = api_router.layer(axum::middleware::from_fn_with_state(
                limiter,
                crate::adapters::rate_limit::rate_limit_middleware,
            ));
        }
    }

    public_router.merge(api_router).layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
