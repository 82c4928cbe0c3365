// Display host - where composed output becomes visible
use crate::domain::error::DashboardError;
use crate::domain::map::MapArtifact;
use crate::domain::metric::MetricPair;
use crate::domain::page::{Block, Page};

pub trait DisplayHost: Send {
    /// Show the composed map at a fixed pixel size
    fn show_map(&mut self, map: &MapArtifact, width: u32, height: u32) -> Result<(), DashboardError>;

    fn show_subheader(&mut self, text: &str);

    /// Show metrics as side-by-side columns
    fn show_metric_columns(&mut self, columns: Vec<Vec<MetricPair>>);

    fn show_info(&mut self, text: &str);

    fn show_error(&mut self, text: &str);
}

/// Collects displayed output into a [`Page`].
#[derive(Debug, Default)]
pub struct PageBuilder {
    page: Page,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Page {
        self.page
    }
}

impl DisplayHost for PageBuilder {
    fn show_map(&mut self, map: &MapArtifact, width: u32, height: u32) -> Result<(), DashboardError> {
        let encoded = serde_json::to_string(map)?;
        self.page.blocks.push(Block::Map {
            artifact: map.clone(),
            encoded,
            width,
            height,
        });
        Ok(())
    }

    fn show_subheader(&mut self, text: &str) {
        self.page.blocks.push(Block::Subheader(text.to_string()));
    }

    fn show_metric_columns(&mut self, columns: Vec<Vec<MetricPair>>) {
        self.page.blocks.push(Block::MetricColumns(columns));
    }

    fn show_info(&mut self, text: &str) {
        self.page.blocks.push(Block::Info(text.to_string()));
    }

    fn show_error(&mut self, text: &str) {
        self.page.blocks.push(Block::Error(text.to_string()));
    }
}
