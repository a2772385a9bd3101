//! REST API handlers
//!
//! Provides form generation, export, preview and editing endpoints. Every
//! response uses the `{ "success": bool, ... }` envelope.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::adapters::metrics_handler::MetricsCollector;
use crate::domain::Form;
use crate::editor::{EditOp, FormState};
use crate::generation::{FormOrchestrator, OrchestratorError};
use crate::render::{self, ExportFormat, HtmlExporter, PreviewForm};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<FormOrchestrator>,
    pub html: Arc<HtmlExporter>,
    pub metrics: Arc<MetricsCollector>,
}

impl AppState {
    fn record(&self, endpoint: &str, status: StatusCode) {
        self.metrics
            .requests_total
            .with_label_values(&[endpoint, status.as_str()])
            .inc();
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Response envelope; `data` fields are inlined next to `success`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Unsuccessful outcome that still carries data
    pub fn rejected(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Some(data),
            error: Some(message.into()),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratedBody {
    pub form: Form,
}

#[derive(Debug, Serialize)]
pub struct PreviewBody {
    pub preview: PreviewForm,
}

#[derive(Debug, Serialize)]
pub struct EditBody {
    pub form: Form,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub form: Form,
    pub op: EditOp,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

// ============================================================================
// Generation
// ============================================================================

/// `POST /api/generate-form`
pub async fn generate_form(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "/api/generate-form";

    let prompt = payload
        .ok()
        .and_then(|Json(body)| body.get("prompt").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_default();

    let orchestrator = state.orchestrator.clone();
    let outcome = tokio::spawn(async move { orchestrator.handle_generate(&prompt).await })
        .await
        .map_err(OrchestratorError::from)
        .and_then(|result| result);

    match outcome {
        Ok(generated) => {
            state.record(ENDPOINT, StatusCode::OK);
            (
                StatusCode::OK,
                Json(ApiResponse::success(GeneratedBody {
                    form: generated.form,
                })),
            )
                .into_response()
        }
        Err(OrchestratorError::MissingPrompt) => {
            state.record(ENDPOINT, StatusCode::BAD_REQUEST);
            error_response(StatusCode::BAD_REQUEST, "Prompt is required")
        }
        Err(e) => {
            tracing::error!("API error: {}", e);
            state.record(ENDPOINT, StatusCode::INTERNAL_SERVER_ERROR);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

// ============================================================================
// Export & Preview
// ============================================================================

fn form_or_400(payload: Result<Json<Form>, JsonRejection>) -> Result<Form, Response> {
    payload
        .map(|Json(form)| form)
        .map_err(|rejection| error_response(StatusCode::BAD_REQUEST, rejection.body_text()))
}

/// `POST /api/forms/export/json`
pub async fn export_json(
    State(state): State<AppState>,
    payload: Result<Json<Form>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "/api/forms/export/json";

    let form = match form_or_400(payload) {
        Ok(form) => form,
        Err(response) => {
            state.record(ENDPOINT, StatusCode::BAD_REQUEST);
            return response;
        }
    };

    match render::export(&form, ExportFormat::Json) {
        Ok(exported) => {
            state.record(ENDPOINT, StatusCode::OK);
            Json(ApiResponse::success(exported)).into_response()
        }
        Err(e) => {
            tracing::error!("JSON export failed: {}", e);
            state.record(ENDPOINT, StatusCode::INTERNAL_SERVER_ERROR);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// `POST /api/forms/export/html`
pub async fn export_html(
    State(state): State<AppState>,
    payload: Result<Json<Form>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "/api/forms/export/html";

    let form = match form_or_400(payload) {
        Ok(form) => form,
        Err(response) => {
            state.record(ENDPOINT, StatusCode::BAD_REQUEST);
            return response;
        }
    };

    match state.html.render(&form) {
        Ok(content) => {
            state.record(ENDPOINT, StatusCode::OK);
            Json(ApiResponse::success(render::Export {
                filename: render::export_filename(&form, ExportFormat::Html),
                content,
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!("HTML export failed: {}", e);
            state.record(ENDPOINT, StatusCode::INTERNAL_SERVER_ERROR);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// `POST /api/forms/preview`
pub async fn preview(
    State(state): State<AppState>,
    payload: Result<Json<Form>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "/api/forms/preview";

    match form_or_400(payload) {
        Ok(form) => {
            state.record(ENDPOINT, StatusCode::OK);
            Json(ApiResponse::success(PreviewBody {
                preview: render::preview(&form),
            }))
            .into_response()
        }
        Err(response) => {
            state.record(ENDPOINT, StatusCode::BAD_REQUEST);
            response
        }
    }
}

// ============================================================================
// Editing
// ============================================================================

/// `POST /api/forms/edit`
///
/// Stateless: the client sends the current form with one operation and gets
/// the next form back. A refused edit (removing the last section) returns
/// `success: false` with the unchanged form.
pub async fn edit_form(
    State(state): State<AppState>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Response {
    const ENDPOINT: &str = "/api/forms/edit";

    let Json(EditRequest { form, op }) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            state.record(ENDPOINT, StatusCode::BAD_REQUEST);
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let op_name = op.name();
    let transition = op.apply(FormState::new(form));
    let outcome = transition.outcome;

    state
        .metrics
        .edits_total
        .with_label_values(&[op_name, outcome.as_str()])
        .inc();
    state.record(ENDPOINT, StatusCode::OK);
    tracing::debug!(op = op_name, outcome = outcome.as_str(), "Form edited");

    let notice = outcome.notice().map(|n| n.message().to_string());
    let body = EditBody {
        form: transition.state.into_form(),
        notice: notice.clone(),
    };

    let response = if outcome.is_rejected() {
        ApiResponse::rejected(body, notice.unwrap_or_default())
    } else {
        ApiResponse::success(body)
    };
    Json(response).into_response()
}
