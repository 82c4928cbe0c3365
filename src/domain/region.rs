// Region and marker domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A named area drawn as a filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub label: String,
    pub color: String,
    pub vertices: Vec<LatLng>,
}

impl Region {
    pub fn new(name: String, color: String, vertices: Vec<LatLng>) -> Self {
        Self {
            label: name.clone(),
            name,
            color,
            vertices,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// True when the ring has at least four vertices and ends where it starts.
    pub fn is_closed_ring(&self) -> bool {
        self.vertices.len() >= 4 && self.vertices.first() == self.vertices.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    pub label: String,
    pub color: String,
}

impl Marker {
    pub fn new(position: LatLng, label: String, color: String) -> Self {
        Self {
            position,
            label,
            color,
        }
    }
}

/// The two hand-drawn ward boxes used when no remote boundary data is configured.
pub fn static_regions() -> Vec<Region> {
    vec![
        Region::new(
            "East Ham".to_string(),
            "blue".to_string(),
            box_ring(51.5389, 51.5489, 0.0517, 0.0617),
        ),
        Region::new(
            "West Ham".to_string(),
            "red".to_string(),
            box_ring(51.5389, 51.5489, 0.0217, 0.0317),
        ),
    ]
}

pub fn station_markers() -> Vec<Marker> {
    vec![
        Marker::new(
            LatLng::new(51.5417, 0.0517),
            "East Ham Station".to_string(),
            "blue".to_string(),
        ),
        Marker::new(
            LatLng::new(51.5417, 0.0317),
            "West Ham Station".to_string(),
            "red".to_string(),
        ),
    ]
}

fn box_ring(south: f64, north: f64, west: f64, east: f64) -> Vec<LatLng> {
    vec![
        LatLng::new(south, west),
        LatLng::new(south, east),
        LatLng::new(north, east),
        LatLng::new(north, west),
        LatLng::new(south, west),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_regions_are_closed_rings() {
        let regions = static_regions();
        assert_eq!(regions.len(), 2);

        for region in &regions {
            assert_eq!(region.vertices.len(), 5);
            assert_eq!(region.vertices.first(), region.vertices.last());
            assert!(region.is_closed_ring());
        }

        assert_eq!(regions[0].name, "East Ham");
        assert_eq!(regions[0].vertices[1], LatLng::new(51.5389, 0.0617));
        assert_eq!(regions[1].name, "West Ham");
        assert_eq!(regions[1].color, "red");
    }

    #[test]
    fn test_static_regions_are_deterministic() {
        assert_eq!(static_regions(), static_regions());
    }

    #[test]
    fn test_open_ring_is_rejected() {
        let region = Region::new(
            "Stratford".to_string(),
            "green".to_string(),
            vec![
                LatLng::new(51.54, 0.00),
                LatLng::new(51.55, 0.00),
                LatLng::new(51.55, 0.01),
                LatLng::new(51.54, 0.01),
            ],
        );
        assert!(!region.is_closed_ring());
    }

    #[test]
    fn test_station_markers() {
        let markers = station_markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].label, "East Ham Station");
        assert_eq!(markers[1].position, LatLng::new(51.5417, 0.0317));
    }
}
