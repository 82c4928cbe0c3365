// Dashboard service - Use case for composing and rendering the borough map
use crate::application::boundary_cache::BoundaryCache;
use crate::application::boundary_repository::{BoundaryFeature, BoundaryRepository};
use crate::application::display_host::DisplayHost;
use crate::domain::error::DashboardError;
use crate::domain::map::{Control, MapArtifact, MAP_CENTER, MAP_TILES, MAP_ZOOM};
use crate::domain::metric::area_metrics;
use crate::domain::region::{static_regions, station_markers, Marker, Region};
use std::sync::Arc;

pub const MAP_WIDTH: u32 = 1200;
pub const MAP_HEIGHT: u32 = 600;

pub const REMEDIATION_HINT: &str = "Please make sure all required packages are installed correctly.";
pub const LOAD_HINT: &str =
    "Check that the boundary source is reachable; the map is shown without those boundaries.";

const STATISTICS_HEADING: &str = "Area Statistics";
const FUTURE_UPDATES_NOTE: &str = "This is a basic version of the dashboard. Future updates will include:\n\
- More detailed boundary data\n\
- Additional statistics and metrics\n\
- Interactive data visualization\n\
- Historical data comparison";

/// Wards looked up in remote boundary data, with their overlay colour.
const REGION_TARGETS: [(&str, &str); 2] = [("East Ham", "blue"), ("West Ham", "red")];

#[derive(Clone)]
pub enum BoundarySource {
    /// Hand-drawn ward boxes, no network access.
    Static,
    /// GeoJSON fetched once per process and filtered by ward name.
    Remote {
        repository: Arc<dyn BoundaryRepository>,
        cache: BoundaryCache,
    },
}

/// Map composed for one pass, plus the boundary load failure if one was recovered.
#[derive(Debug)]
pub struct ComposedMap {
    pub map: MapArtifact,
    pub load_error: Option<DashboardError>,
}

#[derive(Clone)]
pub struct DashboardService {
    source: BoundarySource,
}

impl DashboardService {
    pub fn new(source: BoundarySource) -> Self {
        Self { source }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.source, BoundarySource::Remote { .. })
    }

    pub fn build_map(&self) -> MapArtifact {
        MapArtifact::new(MAP_CENTER, MAP_ZOOM, MAP_TILES)
    }

    pub async fn load_regions(&self) -> Result<Vec<Region>, DashboardError> {
        match &self.source {
            BoundarySource::Static => Ok(static_regions()),
            BoundarySource::Remote { repository, cache } => {
                let hit = cache.is_populated();
                let cached = cache.get_or_fetch(repository.as_ref()).await?;
                tracing::debug!(
                    "Using {} boundary features fetched at {} (cache hit: {})",
                    cached.features.len(),
                    cached.fetched_at,
                    hit
                );
                Ok(select_regions(&cached.features))
            }
        }
    }

    /// Appends every region and marker as a new layer. Existing layers are kept.
    pub fn add_overlays(
        &self,
        map: &mut MapArtifact,
        regions: &[Region],
        markers: &[Marker],
    ) -> Result<(), DashboardError> {
        for region in regions {
            if !region.is_closed_ring() {
                return Err(DashboardError::InvalidOverlay {
                    name: region.name.clone(),
                    reason: format!(
                        "polygon ring with {} vertices is not closed",
                        region.vertices.len()
                    ),
                });
            }
            map.add_polygon(region.clone());
        }

        for marker in markers {
            map.add_marker(marker.clone());
        }

        Ok(())
    }

    pub fn add_controls(&self, map: &mut MapArtifact) {
        map.add_control(Control::Fullscreen);
        map.add_control(Control::MousePosition);
        if self.is_remote() {
            map.add_control(Control::MiniMap);
        }
    }

    pub fn render(&self, host: &mut dyn DisplayHost, map: &MapArtifact) -> Result<(), DashboardError> {
        host.show_map(map, MAP_WIDTH, MAP_HEIGHT)
    }

    pub fn display_metrics(&self, host: &mut dyn DisplayHost) {
        host.show_subheader(STATISTICS_HEADING);
        host.show_metric_columns(area_metrics());
        host.show_info(FUTURE_UPDATES_NOTE);
    }

    /// Builds the map with overlays and controls.
    ///
    /// A boundary load failure is recovered here: the regions are left out and
    /// the error is returned alongside the map. Any other failure is an `Err`.
    pub async fn compose_map(&self) -> Result<ComposedMap, DashboardError> {
        let mut map = self.build_map();

        let (regions, load_error) = match self.load_regions().await {
            Ok(regions) => (regions, None),
            Err(e) => {
                tracing::warn!("Skipping boundary overlays: {}", e);
                (Vec::new(), Some(e))
            }
        };

        self.add_overlays(&mut map, &regions, &station_markers())?;
        self.add_controls(&mut map);

        Ok(ComposedMap { map, load_error })
    }

    /// Runs one full rendering pass against the host.
    ///
    /// Errors that escape the pass are shown once as a banner with the
    /// remediation hint, and nothing further is displayed.
    pub async fn run_pass(&self, host: &mut dyn DisplayHost) {
        if let Err(e) = self.try_pass(host).await {
            tracing::error!(kind = ?e.kind(), "Dashboard pass failed: {}", e);
            host.show_error(&format!("An error occurred: {}", e));
            host.show_info(REMEDIATION_HINT);
        }
    }

    async fn try_pass(&self, host: &mut dyn DisplayHost) -> Result<(), DashboardError> {
        let composed = self.compose_map().await?;

        if let Some(e) = &composed.load_error {
            host.show_error(&format!("Error loading boundary data: {}", e));
            host.show_info(REMEDIATION_HINT);
            host.show_info(LOAD_HINT);
        }

        self.render(host, &composed.map)?;
        self.display_metrics(host);

        Ok(())
    }
}

/// One region per polygon part of every feature matching a target ward.
fn select_regions(features: &[BoundaryFeature]) -> Vec<Region> {
    let mut regions = Vec::new();

    for (target, color) in REGION_TARGETS {
        let matches: Vec<&BoundaryFeature> =
            features.iter().filter(|f| f.name_contains(target)).collect();

        if matches.is_empty() {
            tracing::info!("No boundary features match '{}', skipping overlay", target);
            continue;
        }

        for feature in matches {
            for ring in &feature.rings {
                regions.push(
                    Region::new(feature.name.clone(), color.to_string(), ring.clone())
                        .with_label(target),
                );
            }
        }
    }

    regions
}
