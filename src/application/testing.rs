// In-memory boundary repository for service tests
use crate::application::boundary_repository::{BoundaryFeature, BoundaryRepository};
use crate::domain::error::DashboardError;
use crate::domain::region::LatLng;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct FakeBoundaryRepository {
    features: Option<Vec<BoundaryFeature>>,
    fetches: AtomicUsize,
}

impl FakeBoundaryRepository {
    pub fn with_features(features: Vec<BoundaryFeature>) -> Self {
        Self {
            features: Some(features),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            features: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BoundaryRepository for FakeBoundaryRepository {
    fn location(&self) -> &str {
        "memory://boundaries"
    }

    async fn fetch_boundaries(&self) -> Result<Vec<BoundaryFeature>, DashboardError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.features.clone().ok_or_else(|| DashboardError::Fetch {
            url: self.location().to_string(),
            message: "connection refused".to_string(),
        })
    }
}

/// Small closed square with its south-west corner at the given point.
pub fn closed_box(lat: f64, lng: f64) -> Vec<LatLng> {
    vec![
        LatLng::new(lat, lng),
        LatLng::new(lat, lng + 0.01),
        LatLng::new(lat + 0.01, lng + 0.01),
        LatLng::new(lat + 0.01, lng),
        LatLng::new(lat, lng),
    ]
}
