//! Axum route handlers for the Match Explanation API.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::explanation::models::MatchResult;
use crate::explanation::renderer::render;
use crate::explanation::report::RenderOutcome;
use crate::explanation::text::render_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchExplainRequest {
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Serialize)]
pub struct BatchExplainResponse {
    pub reports: Vec<RenderOutcome>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/explain
///
/// Renders one match result. A rejected overall score still returns 200 with
/// `status: "partial"` and the error in the body.
pub async fn handle_explain(Json(result): Json<MatchResult>) -> Json<RenderOutcome> {
    Json(render(&result))
}

/// POST /api/v1/matches/explain/text
///
/// Same input as `/explain`, rendered as plain text.
pub async fn handle_explain_text(Json(result): Json<MatchResult>) -> impl IntoResponse {
    let text = render_text(&render(&result));
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text)
}

/// POST /api/v1/matches/explain/batch
///
/// Renders each match independently; reports come back in request order.
pub async fn handle_explain_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchExplainRequest>,
) -> Result<Json<BatchExplainResponse>, AppError> {
    if request.matches.is_empty() {
        return Err(AppError::Validation("matches cannot be empty".to_string()));
    }

    let limit = state.config.max_batch_size;
    if request.matches.len() > limit {
        return Err(AppError::Validation(format!(
            "matches exceeds the batch limit of {limit} (got {})",
            request.matches.len()
        )));
    }

    let reports: Vec<RenderOutcome> = request.matches.iter().map(render).collect();
    let partial = reports.iter().filter(|r| r.is_partial()).count();
    info!(total = reports.len(), partial, "Rendered match explanation batch");

    Ok(Json(BatchExplainResponse { reports }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_app(max_batch_size: usize) -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                max_batch_size,
            },
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        post_raw(app, uri, &body.to_string()).await
    }

    /// Sends the body verbatim so key order in JSON objects survives.
    async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_explain_renders_report() {
        let (status, body) = post_raw(
            test_app(10),
            "/api/v1/matches/explain",
            r#"{
                "overallScore": 0.853,
                "breakdown": { "skills": 0.9, "experience": 0.755 },
                "matchedSkills": ["React", "React"]
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "rendered");
        assert_eq!(value["headline"]["formatted"], "85%");
        assert_eq!(value["headline"]["severity"], "strong");
        assert_eq!(value["breakdown"][0]["key"], "skills");
        assert_eq!(value["breakdown"][0]["formatted"], "90%");
        assert_eq!(value["breakdown"][1]["key"], "experience");
        assert_eq!(value["breakdown"][1]["formatted"], "76%");
        assert_eq!(value["matchedSkills"], json!([{ "name": "React" }]));
        assert!(value.get("strengths").is_none());
    }

    #[tokio::test]
    async fn test_explain_invalid_score_is_partial() {
        let (status, body) = post_json(
            test_app(10),
            "/api/v1/matches/explain",
            json!({ "overallScore": 1.5, "strengths": ["Fast learner"] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "partial");
        assert_eq!(value["error"]["code"], "OVERALL_SCORE_OUT_OF_RANGE");
        assert!(value.get("headline").is_none());
        assert_eq!(value["strengths"], json!(["Fast learner"]));
    }

    #[tokio::test]
    async fn test_explain_text() {
        let (status, body) = post_json(
            test_app(10),
            "/api/v1/matches/explain/text",
            json!({ "overallScore": 0.45 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "Overall Match Score: 45% (weak)\nFair match for this position\n"
        );
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let (status, body) = post_json(
            test_app(10),
            "/api/v1/matches/explain/batch",
            json!({ "matches": [
                { "overallScore": 0.95 },
                {},
                { "overallScore": 0.6 }
            ]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).unwrap();
        let reports = value["reports"].as_array().unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0]["headline"]["formatted"], "95%");
        assert_eq!(reports[1]["error"]["code"], "MISSING_OVERALL_SCORE");
        assert_eq!(reports[2]["headline"]["severity"], "moderate");
    }

    #[tokio::test]
    async fn test_batch_rejects_empty() {
        let (status, body) = post_json(
            test_app(10),
            "/api/v1/matches/explain/batch",
            json!({ "matches": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_batch_rejects_over_limit() {
        let (status, _) = post_json(
            test_app(2),
            "/api/v1/matches/explain/batch",
            json!({ "matches": [
                { "overallScore": 0.1 },
                { "overallScore": 0.2 },
                { "overallScore": 0.3 }
            ]}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let (status, _) = post_json(
            test_app(10),
            "/api/v1/matches/explain",
            json!({ "overallScore": "high" }),
        )
        .await;

        assert!(status.is_client_error());
    }
}
