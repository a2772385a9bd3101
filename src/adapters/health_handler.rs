use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::generation::FormOrchestrator;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub templates: String,
    pub llm: String,
}

pub struct HealthHandler {
    orchestrator: Arc<FormOrchestrator>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(orchestrator: Arc<FormOrchestrator>) -> Self {
        Self {
            orchestrator,
            start_time: std::time::Instant::now(),
        }
    }

    fn llm_state(&self) -> &'static str {
        if self.orchestrator.has_llm() {
            "configured"
        } else {
            "disabled"
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks: HealthChecks {
                templates: "ok".to_string(),
                llm: self.llm_state().to_string(),
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check. The template fallback is always available, so the
    /// server is ready as soon as it is routing; backend reachability is
    /// reported but never blocks readiness.
    pub async fn ready(&self) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ready",
                "message": "Server is ready to accept requests",
                "llm": self.llm_state()
            })),
        )
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "alive",
                "message": "Server is alive"
            })),
        )
    }
}
