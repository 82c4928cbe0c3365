// Dashboard errors - Load and render failures of a rendering pass
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The boundary source could not be reached or timed out.
    #[error("Failed to fetch boundaries from {url}: {message}")]
    Fetch { url: String, message: String },

    /// The boundary source answered with a non-success status.
    #[error("Boundary source {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The boundary payload is not a usable GeoJSON FeatureCollection.
    #[error("Invalid boundary data: {0}")]
    Parse(String),

    /// An overlay could not be attached to the map.
    #[error("Invalid overlay '{name}': {reason}")]
    InvalidOverlay { name: String, reason: String },

    /// The map artifact could not be encoded for the display host.
    #[error("Failed to encode map: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Boundary loading failed; recovered locally by skipping the overlay.
    Load,
    /// Map composition or rendering failed; trips the page-level guard.
    Render,
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Fetch { .. }
            | DashboardError::Status { .. }
            | DashboardError::Parse(_) => ErrorKind::Load,
            DashboardError::InvalidOverlay { .. } | DashboardError::Encode(_) => ErrorKind::Render,
        }
    }

    pub fn from_reqwest(url: &str, err: reqwest::Error) -> DashboardError {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };

        DashboardError::Fetch {
            url: url.to_string(),
            message,
        }
    }
}
