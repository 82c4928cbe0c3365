// Repository trait for boundary data access
use crate::domain::error::DashboardError;
use crate::domain::region::LatLng;
use async_trait::async_trait;

/// A named feature from a boundary collection, one exterior ring per polygon part.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub name: String,
    pub rings: Vec<Vec<LatLng>>,
}

impl BoundaryFeature {
    pub fn new(name: String, rings: Vec<Vec<LatLng>>) -> Self {
        Self { name, rings }
    }

    /// Case-insensitive substring match against the feature name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[async_trait]
pub trait BoundaryRepository: Send + Sync {
    /// Source location, used in logs and error messages
    fn location(&self) -> &str;

    /// Fetch every named feature from the source
    async fn fetch_boundaries(&self) -> Result<Vec<BoundaryFeature>, DashboardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_contains_ignores_case() {
        let feature = BoundaryFeature::new("EAST HAM CENTRAL".to_string(), Vec::new());
        assert!(feature.name_contains("East Ham"));
        assert!(feature.name_contains("ham"));
        assert!(!feature.name_contains("West Ham"));
    }
}
