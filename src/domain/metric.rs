// Area statistics shown under the map
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPair {
    pub label: String,
    pub value: String,
}

impl MetricPair {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Fixed published figures, one column per ward. They are not derived from
/// the boundary geometry.
pub fn area_metrics() -> Vec<Vec<MetricPair>> {
    vec![
        vec![
            MetricPair::new("East Ham Population", "76,186"),
            MetricPair::new("East Ham Area", "3.41 km²"),
        ],
        vec![
            MetricPair::new("West Ham Population", "98,237"),
            MetricPair::new("West Ham Area", "4.12 km²"),
        ],
    ]
}
