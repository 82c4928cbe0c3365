// Domain layer - Map, overlay and page models
pub mod error;
pub mod map;
pub mod metric;
pub mod page;
pub mod region;
