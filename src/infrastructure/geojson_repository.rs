// GeoJSON-over-HTTP boundary repository
use crate::application::boundary_repository::{BoundaryFeature, BoundaryRepository};
use crate::domain::error::DashboardError;
use crate::domain::region::LatLng;
use async_trait::async_trait;
use geojson::{GeoJson, PolygonType, Value};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GeoJsonRepository {
    url: String,
    name_property: String,
    client: reqwest::Client,
}

impl GeoJsonRepository {
    pub fn new(url: String, name_property: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url,
            name_property,
            client,
        })
    }
}

#[async_trait]
impl BoundaryRepository for GeoJsonRepository {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_boundaries(&self) -> Result<Vec<BoundaryFeature>, DashboardError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/geo+json, application/json")
            .send()
            .await
            .map_err(|e| DashboardError::from_reqwest(&self.url, e))?;

        if !response.status().is_success() {
            return Err(DashboardError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::from_reqwest(&self.url, e))?;

        tracing::debug!("Received {} bytes of boundary data", body.len());
        parse_feature_collection(&body, &self.name_property)
    }
}

/// Parses a FeatureCollection into named features.
///
/// Features without a string name property or without polygon geometry are
/// skipped. Only exterior rings are kept.
pub fn parse_feature_collection(
    body: &str,
    name_property: &str,
) -> Result<Vec<BoundaryFeature>, DashboardError> {
    let geojson: GeoJson = body
        .parse()
        .map_err(|e: geojson::Error| DashboardError::Parse(e.to_string()))?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(DashboardError::Parse(
                "GeoJSON must be a FeatureCollection".to_string(),
            ));
        }
    };

    let mut features = Vec::new();

    for feature in collection.features {
        let name = match feature
            .properties
            .as_ref()
            .and_then(|props| props.get(name_property))
        {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => continue,
        };

        let rings = match feature.geometry.map(|g| g.value) {
            Some(Value::Polygon(polygon)) => exterior_ring(&polygon).into_iter().collect(),
            Some(Value::MultiPolygon(parts)) => parts.iter().filter_map(exterior_ring).collect(),
            _ => {
                tracing::debug!("Skipping feature '{}' without polygon geometry", name);
                continue;
            }
        };

        features.push(BoundaryFeature::new(name, rings));
    }

    Ok(features)
}

// GeoJSON positions are [longitude, latitude]
fn exterior_ring(polygon: &PolygonType) -> Option<Vec<LatLng>> {
    polygon.first().map(|ring| {
        ring.iter()
            .filter(|position| position.len() >= 2)
            .map(|position| LatLng::new(position[1], position[0]))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use axum::{http::StatusCode, routing::get, Router};

    const WARDS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "NAME": "East Ham Central", "GSS_CODE": "E05013902" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.05, 51.53], [0.06, 51.53], [0.06, 51.54], [0.05, 51.53]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "West Ham" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[0.02, 51.53], [0.03, 51.53], [0.03, 51.54], [0.02, 51.53]]],
                        [[[0.01, 51.52], [0.02, 51.52], [0.02, 51.53], [0.01, 51.52]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "Stratford Station" },
                "geometry": { "type": "Point", "coordinates": [-0.0035, 51.5416] }
            },
            {
                "type": "Feature",
                "properties": { "CODE": 42 },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 51.5], [0.1, 51.5], [0.1, 51.6], [0.0, 51.5]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let features = parse_feature_collection(WARDS, "NAME").unwrap();
        assert_eq!(features.len(), 2);

        assert_eq!(features[0].name, "East Ham Central");
        assert_eq!(features[0].rings.len(), 1);
        assert_eq!(features[0].rings[0][1], LatLng::new(51.53, 0.06));

        assert_eq!(features[1].name, "West Ham");
        assert_eq!(features[1].rings.len(), 2);
    }

    #[test]
    fn test_custom_name_property() {
        let features = parse_feature_collection(WARDS, "GSS_CODE").unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "E05013902");
    }

    #[test]
    fn test_rejects_non_collection() {
        let err = parse_feature_collection(r#"{"type": "Point", "coordinates": [0.0, 51.5]}"#, "NAME")
            .unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));

        let err = parse_feature_collection("<html>not found</html>", "NAME").unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn repository(url: String) -> GeoJsonRepository {
        GeoJsonRepository::new(url, "NAME".to_string(), Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_boundaries_over_http() {
        let base = serve(Router::new().route("/wards.geojson", get(|| async { WARDS }))).await;

        let features = repository(format!("{}/wards.geojson", base))
            .fetch_boundaries()
            .await
            .unwrap();

        let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["East Ham Central", "West Ham"]);
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let base = serve(Router::new().route(
            "/missing.geojson",
            get(|| async { (StatusCode::NOT_FOUND, "no such layer") }),
        ))
        .await;

        let err = repository(format!("{}/missing.geojson", base))
            .fetch_boundaries()
            .await
            .unwrap_err();

        assert!(matches!(err, DashboardError::Status { status: 404, .. }));
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_fetch_error() {
        let base = serve(Router::new().route(
            "/slow.geojson",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                WARDS
            }),
        ))
        .await;

        let err = repository(format!("{}/slow.geojson", base))
            .fetch_boundaries()
            .await
            .unwrap_err();

        match &err {
            DashboardError::Fetch { message, .. } => assert!(message.contains("timed out")),
            other => panic!("expected fetch error, got {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::Load);
    }
}
