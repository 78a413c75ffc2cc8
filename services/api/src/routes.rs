use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use dpr_studio::dashboard::{
    default_focus, ConversationTurn, FinancialDashboard, FinancialDashboardView, GeoReachView,
    SchemeMatcherView, DEFAULT_READINESS,
};
use dpr_studio::datasets::FreeTextInput;
use dpr_studio::error::AppError;
use dpr_studio::scoring::focus_areas;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReachQuery {
    pub(crate) width: Option<f64>,
    pub(crate) height: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SchemeMatchRequest {
    #[serde(default)]
    pub(crate) focus: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) readiness_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FocusAreasResponse {
    pub(crate) focus_areas: Vec<String>,
}

pub(crate) fn studio_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/financial/:sector", get(financial_endpoint))
        .route("/api/v1/geo/reach", get(geo_reach_endpoint))
        .route("/api/v1/schemes/focus-areas", get(focus_areas_endpoint))
        .route("/api/v1/schemes/match", post(scheme_match_endpoint))
        .route("/api/v1/conversation", post(conversation_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn financial_endpoint(
    Extension(state): Extension<AppState>,
    Path(sector): Path<usize>,
) -> Result<Json<FinancialDashboardView>, AppError> {
    let view = FinancialDashboard::build(&state.data, sector)?;
    Ok(Json(view))
}

/// Non-positive or non-finite dimensions fall back to the default box.
pub(crate) async fn geo_reach_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<ReachQuery>,
) -> Json<GeoReachView> {
    let usable = |value: Option<f64>| value.filter(|v| v.is_finite() && *v > 0.0);
    let width = usable(query.width).unwrap_or(GeoReachView::DEFAULT_WIDTH);
    let height = usable(query.height).unwrap_or(GeoReachView::DEFAULT_HEIGHT);

    Json(GeoReachView::build(
        &state.data.state_outline,
        &state.data.supply_nodes,
        width,
        height,
    ))
}

pub(crate) async fn focus_areas_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<FocusAreasResponse> {
    Json(FocusAreasResponse {
        focus_areas: focus_areas(&state.data.schemes),
    })
}

pub(crate) async fn scheme_match_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SchemeMatchRequest>,
) -> Json<SchemeMatcherView> {
    let focus = payload.focus.unwrap_or_else(default_focus);
    let readiness = payload.readiness_score.unwrap_or(DEFAULT_READINESS);
    Json(SchemeMatcherView::build(&state.data.schemes, &focus, readiness))
}

/// Blank narratives produce no exchange and answer `204 No Content`.
pub(crate) async fn conversation_endpoint(Json(input): Json<FreeTextInput>) -> Response {
    match ConversationTurn::default().respond(&input, Utc::now()) {
        Some(exchange) => Json(exchange).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use dpr_studio::datasets::ReferenceData;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            data: Arc::new(ReferenceData::standard()),
        }
    }

    fn app(ready: bool) -> Router {
        studio_routes().layer(Extension(test_state(ready)))
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn readiness_reflects_the_flag() {
        let response = app(false).oneshot(get_request("/ready")).await.expect("responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true).oneshot(get_request("/ready")).await.expect("responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn financial_view_for_first_sector() {
        let response = app(true)
            .oneshot(get_request("/api/v1/financial/0"))
            .await
            .expect("responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["profile"]["sub_sector"], "Food Processing");
        assert_eq!(body["cashflow"]["series"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["allocation"]["slices"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["allocation"]["slices"][0]["label"], "Capex Assets");
    }

    #[tokio::test]
    async fn unknown_sector_is_a_client_error() {
        let response = app(true)
            .oneshot(get_request("/api/v1/financial/42"))
            .await
            .expect("responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains("unknown sector index 42"));
    }

    #[tokio::test]
    async fn geo_reach_honours_the_requested_box() {
        let response = app(true)
            .oneshot(get_request("/api/v1/geo/reach?width=200&height=100"))
            .await
            .expect("responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["width"], 200.0);
        assert_eq!(body["height"], 100.0);
        let svg = body["outline_svg"].as_str().expect("outline path");
        assert!(svg.starts_with("M "));
        assert!(svg.ends_with(" Z"));
    }

    #[tokio::test]
    async fn geo_reach_falls_back_to_default_box() {
        let response = app(true)
            .oneshot(get_request("/api/v1/geo/reach?width=-5"))
            .await
            .expect("responds");
        let body = json_body(response).await;
        assert_eq!(body["width"], 420.0);
        assert_eq!(body["height"], 360.0);
    }

    #[tokio::test]
    async fn focus_areas_are_sorted() {
        let response = app(true)
            .oneshot(get_request("/api/v1/schemes/focus-areas"))
            .await
            .expect("responds");
        let body = json_body(response).await;
        let areas: Vec<String> = body["focus_areas"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();
        let mut sorted = areas.clone();
        sorted.sort();
        assert_eq!(areas, sorted);
        assert!(areas.contains(&"Working Capital".to_string()));
    }

    #[tokio::test]
    async fn scheme_match_defaults_to_initial_state() {
        let response = app(true)
            .oneshot(post_json("/api/v1/schemes/match", json!({})))
            .await
            .expect("responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["readiness_pct"], 62);
        let matches = body["matches"].as_array().expect("matches");
        assert!(!matches.is_empty());
        let scores: Vec<f64> = matches
            .iter()
            .filter_map(|card| card["fit_score"].as_f64())
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[tokio::test]
    async fn conversation_scores_the_narrative() {
        let response = app(true)
            .oneshot(post_json(
                "/api/v1/conversation",
                json!({ "text": "Need a loan", "language": "english" }),
            ))
            .await
            .expect("responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["entrepreneur"]["speaker"], "entrepreneur");
        let reply = body["assistant"]["text"].as_str().expect("reply text");
        assert!(reply.contains("- Bankability score (beta): 56%"));
    }

    #[tokio::test]
    async fn blank_conversation_has_no_content() {
        let response = app(true)
            .oneshot(post_json(
                "/api/v1/conversation",
                json!({ "text": "   ", "language": "vernacular" }),
            ))
            .await
            .expect("responds");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let response = app(true).oneshot(get_request("/metrics")).await.expect("responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }
}
