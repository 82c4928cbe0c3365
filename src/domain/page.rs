// Dashboard page domain model
use super::map::MapArtifact;
use super::metric::MetricPair;

pub const PAGE_TITLE: &str = "Newham Dashboard";
pub const PAGE_ICON: &str = "🗺️";
pub const HEADING: &str = "Newham Borough Dashboard";
pub const DESCRIPTION: &str = "This dashboard displays the map of Newham Borough, specifically highlighting East and West Ham areas.\nFuture updates will include additional data visualization and statistics for these areas.";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Map {
        artifact: MapArtifact,
        /// JSON form handed to the browser map library
        encoded: String,
        width: u32,
        height: u32,
    },
    Subheader(String),
    MetricColumns(Vec<Vec<MetricPair>>),
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub icon: String,
    pub wide: bool,
    pub heading: String,
    pub description: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            icon: PAGE_ICON.to_string(),
            wide: true,
            heading: HEADING.to_string(),
            description: DESCRIPTION.to_string(),
            blocks: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Page {
    pub fn map(&self) -> Option<&MapArtifact> {
        self.blocks.iter().find_map(|b| match b {
            Block::Map { artifact, .. } => Some(artifact),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Error(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn infos(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Info(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn metrics(&self) -> Vec<&MetricPair> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::MetricColumns(columns) => Some(columns),
                _ => None,
            })
            .flatten()
            .flatten()
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
