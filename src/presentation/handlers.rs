// HTTP request handlers
use crate::application::display_host::PageBuilder;
use crate::domain::error::ErrorKind;
use crate::domain::map::MapArtifact;
use crate::infrastructure::html_page::render_page;
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    pub map: MapArtifact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard page
pub async fn dashboard_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let mut host = PageBuilder::new();
    state.dashboard_service.run_pass(&mut host).await;
    let html = render_page(&host.finish());

    match html_response(html, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Composed map artifact as JSON
pub async fn map_artifact(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.dashboard_service.compose_map().await {
        Ok(composed) => Json(MapResponse {
            map: composed.map,
            load_error: composed.load_error.map(|e| e.to_string()),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Error composing map: {}", e);
            let status = match e.kind() {
                ErrorKind::Load => StatusCode::BAD_GATEWAY,
                ErrorKind::Render => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::{BoundarySource, DashboardService};
    use axum::body::to_bytes;

    fn static_state() -> Arc<AppState> {
        Arc::new(AppState {
            dashboard_service: DashboardService::new(BoundarySource::Static),
        })
    }

    #[tokio::test]
    async fn test_map_artifact_json() {
        let response = map_artifact(State(static_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["map"]["layers"].as_array().unwrap().len(), 4);
        assert!(json.get("loadError").is_none());
    }

    #[tokio::test]
    async fn test_dashboard_page_html() {
        let response = dashboard_page(HeaderMap::new(), State(static_state()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("West Ham Population"));
    }
}
