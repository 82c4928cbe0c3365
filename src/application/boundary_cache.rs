// Boundary cache - Process-lifetime cache for fetched boundary data
use crate::application::boundary_repository::{BoundaryFeature, BoundaryRepository};
use crate::domain::error::DashboardError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::OnceCell;

#[derive(Debug)]
pub struct CachedBoundaries {
    pub features: Vec<BoundaryFeature>,
    pub fetched_at: DateTime<Utc>,
}

/// Write-once cache shared by every rendering pass.
///
/// The first successful fetch is kept until the cache is dropped. Failed
/// fetches leave the cache empty so the next pass tries again.
#[derive(Clone, Debug, Default)]
pub struct BoundaryCache {
    inner: Arc<OnceCell<Arc<CachedBoundaries>>>,
}

impl BoundaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a fetch has succeeded.
    pub fn is_populated(&self) -> bool {
        self.inner.initialized()
    }

    /// Returns the cached features, fetching them from the repository on a miss.
    pub async fn get_or_fetch(
        &self,
        repository: &dyn BoundaryRepository,
    ) -> Result<Arc<CachedBoundaries>, DashboardError> {
        let cached = self
            .inner
            .get_or_try_init(|| async move {
                tracing::info!("Fetching boundaries from {}", repository.location());
                let features = repository.fetch_boundaries().await?;
                tracing::info!(
                    "Cached {} boundary features from {}",
                    features.len(),
                    repository.location()
                );
                Ok::<_, DashboardError>(Arc::new(CachedBoundaries {
                    features,
                    fetched_at: Utc::now(),
                }))
            })
            .await?;

        Ok(cached.clone())
    }
}
