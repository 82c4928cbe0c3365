// Map artifact domain model
use super::region::{LatLng, Marker, Region};
use serde::Serialize;

pub const MAP_CENTER: LatLng = LatLng::new(51.5417, 0.0357);
pub const MAP_ZOOM: u8 = 13;
pub const MAP_TILES: &str = "CartoDB positron";

const POLYGON_WEIGHT: u32 = 2;
const POLYGON_FILL_OPACITY: f64 = 0.3;
const MARKER_ICON: &str = "info-sign";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonLayer {
    pub region: Region,
    pub weight: u32,
    pub fill_opacity: f64,
    pub tooltip: String,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub marker: Marker,
    pub icon: String,
    pub tooltip: String,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Layer {
    Polygon(PolygonLayer),
    Marker(MarkerLayer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Control {
    Fullscreen,
    MousePosition,
    MiniMap,
}

/// The composed map handed to the display host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapArtifact {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: String,
    pub layers: Vec<Layer>,
    pub controls: Vec<Control>,
}

impl MapArtifact {
    pub fn new(center: LatLng, zoom: u8, tiles: &str) -> Self {
        Self {
            center,
            zoom,
            tiles: tiles.to_string(),
            layers: Vec::new(),
            controls: Vec::new(),
        }
    }

    pub fn add_polygon(&mut self, region: Region) {
        let label = region.label.clone();
        self.layers.push(Layer::Polygon(PolygonLayer {
            region,
            weight: POLYGON_WEIGHT,
            fill_opacity: POLYGON_FILL_OPACITY,
            tooltip: label.clone(),
            popup: label,
        }));
    }

    pub fn add_marker(&mut self, marker: Marker) {
        let label = marker.label.clone();
        self.layers.push(Layer::Marker(MarkerLayer {
            marker,
            icon: MARKER_ICON.to_string(),
            tooltip: label.clone(),
            popup: label,
        }));
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }
}

#[cfg(test)]
impl MapArtifact {
    pub fn polygons(&self) -> impl Iterator<Item = &PolygonLayer> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Polygon(p) => Some(p),
            Layer::Marker(_) => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerLayer> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Marker(m) => Some(m),
            Layer::Polygon(_) => None,
        })
    }
}
